use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub slug: &'static str,
}

impl BlogPost {
    pub fn all() -> &'static [BlogPost] {
        POSTS
    }

    /// Newest `n` posts; the catalog is kept newest first.
    pub fn latest(n: usize) -> &'static [BlogPost] {
        &POSTS[..n.min(POSTS.len())]
    }

    pub fn find_by_slug(slug: &str) -> Option<&'static BlogPost> {
        POSTS.iter().find(|p| p.slug == slug)
    }

    /// Other posts sharing this post's category, in catalog order.
    pub fn related(&self) -> Vec<&'static BlogPost> {
        POSTS
            .iter()
            .filter(|p| p.category == self.category && p.id != self.id)
            .collect()
    }
}

const POSTS: &[BlogPost] = &[
    BlogPost {
        id: "1",
        title: "How to Build a Real-time Chat App with Socket.IO and React",
        excerpt: "Learn how to create a full-featured real-time chat application using Socket.IO, React, and Express.",
        date: "May 3, 2025",
        category: "Tutorial",
        image: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
        slug: "real-time-chat-app",
    },
    BlogPost {
        id: "2",
        title: "Understanding TypeScript Generics: A Beginner's Guide",
        excerpt: "TypeScript generics can be confusing at first. This guide breaks down the concept with practical examples.",
        date: "April 28, 2025",
        category: "TypeScript",
        image: "https://images.unsplash.com/photo-1555099962-4199c345e5dd?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
        slug: "typescript-generics-guide",
    },
    BlogPost {
        id: "3",
        title: "Building Accessible Web Applications: Best Practices",
        excerpt: "Learn how to ensure your web applications are accessible to all users, including those with disabilities.",
        date: "April 15, 2025",
        category: "Accessibility",
        image: "https://images.unsplash.com/photo-1573496005828-adb7680bad53?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
        slug: "accessible-web-applications",
    },
    BlogPost {
        id: "4",
        title: "Redux vs. Context API: When to Use Each",
        excerpt: "A comparison of two popular state management solutions for React applications and guidelines on when to use each one.",
        date: "April 5, 2025",
        category: "React",
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
        slug: "redux-vs-context-api",
    },
    BlogPost {
        id: "5",
        title: "Introduction to Serverless Architecture",
        excerpt: "Discover the benefits and challenges of serverless architecture and how to get started with AWS Lambda.",
        date: "March 22, 2025",
        category: "Cloud",
        image: "https://images.unsplash.com/photo-1560807707-8cc77767d783?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
        slug: "serverless-architecture-intro",
    },
    BlogPost {
        id: "6",
        title: "Optimizing React Performance: Advanced Techniques",
        excerpt: "Deep dive into strategies for optimizing the performance of React applications, from code splitting to memoization.",
        date: "March 10, 2025",
        category: "Performance",
        image: "https://images.unsplash.com/photo-1485856407642-7f9ba0268b51?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
        slug: "react-performance-optimization",
    },
];
