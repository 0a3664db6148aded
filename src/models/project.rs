use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub repo_url: Option<&'static str>,
}

/// Extended case-study narrative shown in the project dialog.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub challenge: &'static str,
    pub solution: &'static str,
    pub impact: &'static str,
}

impl Project {
    pub fn all() -> &'static [Project] {
        PROJECTS
    }

    /// The first `n` projects, as shown on the home page.
    pub fn featured(n: usize) -> &'static [Project] {
        &PROJECTS[..n.min(PROJECTS.len())]
    }

    pub fn find_by_id(id: &str) -> Option<&'static Project> {
        PROJECTS.iter().find(|p| p.id == id)
    }

    /// Case-study narrative, if one was written for this project.
    pub fn detail(&self) -> Option<&'static ProjectDetail> {
        ProjectDetail::for_project(self.id)
    }
}

impl ProjectDetail {
    pub fn for_project(id: &str) -> Option<&'static ProjectDetail> {
        PROJECT_DETAILS
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, detail)| detail)
    }
}

const PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "E-Commerce Platform",
        description: "A modern e-commerce platform built with React, Node.js, and MongoDB, featuring real-time inventory and payment processing.",
        image: "https://images.unsplash.com/photo-1661956602868-6ae368943878?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        demo_url: Some("https://example.com"),
        repo_url: Some("https://github.com/example/repo"),
    },
    Project {
        id: "2",
        title: "AI-Powered Analytics Dashboard",
        description: "A dashboard for visualizing complex data with AI-driven insights, helping businesses make data-driven decisions.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
        tags: &["TypeScript", "Next.js", "Python", "TensorFlow"],
        demo_url: Some("https://example.com"),
        repo_url: Some("https://github.com/example/repo"),
    },
    Project {
        id: "3",
        title: "Social Media Mobile App",
        description: "A cross-platform mobile application for sharing photos and stories with friends, featuring real-time notifications.",
        image: "https://images.unsplash.com/photo-1605379399642-870262d3d051?ixlib=rb-4.0.3&auto=format&fit=crop&w=1506&q=80",
        tags: &["React Native", "Firebase", "Redux", "Expo"],
        demo_url: Some("https://example.com"),
        repo_url: Some("https://github.com/example/repo"),
    },
    Project {
        id: "4",
        title: "Personal Finance Tracker",
        description: "A web application for tracking personal finances, with budgeting tools, expense categorization, and visualization.",
        image: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1472&q=80",
        tags: &["Vue.js", "Express", "PostgreSQL", "Chart.js"],
        demo_url: Some("https://example.com"),
        repo_url: Some("https://github.com/example/repo"),
    },
    Project {
        id: "5",
        title: "Real-time Chat Application",
        description: "A real-time chat application with private messaging, group chats, and file sharing capabilities.",
        image: "https://images.unsplash.com/photo-1557682250-61b3df427d45?ixlib=rb-4.0.3&auto=format&fit=crop&w=1429&q=80",
        tags: &["React", "Socket.IO", "Express", "MongoDB"],
        demo_url: Some("https://example.com"),
        repo_url: Some("https://github.com/example/repo"),
    },
    Project {
        id: "6",
        title: "Task Management System",
        description: "A collaborative task management system for teams with kanban boards, task assignments, and progress tracking.",
        image: "https://images.unsplash.com/photo-1586281380349-632531db7ed4?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80",
        tags: &["React", "Redux", "Node.js", "MongoDB"],
        demo_url: Some("https://example.com"),
        repo_url: Some("https://github.com/example/repo"),
    },
];

const PROJECT_DETAILS: &[(&str, ProjectDetail)] = &[
    (
        "1",
        ProjectDetail {
            challenge: "Creating a scalable e-commerce platform with real-time inventory updates and secure payment processing.",
            solution: "Implemented a microservices architecture with separate services for product management, user authentication, inventory, and payments. Used WebSockets for real-time inventory updates and integrated Stripe for secure payments.",
            impact: "The platform handles thousands of transactions daily with 99.9% uptime and has reduced cart abandonment by 25% due to improved user experience.",
        },
    ),
    (
        "2",
        ProjectDetail {
            challenge: "Processing and visualizing complex data in a way that non-technical users can understand and make decisions from.",
            solution: "Developed an AI-driven system that analyzes data trends and presents insights in an intuitive dashboard. Used TensorFlow for predictive analytics and Chart.js for visualization.",
            impact: "Helped clients reduce decision-making time by 40% and improve accuracy of business forecasts by 30%.",
        },
    ),
    (
        "3",
        ProjectDetail {
            challenge: "Building a performant cross-platform mobile app that works smoothly on both iOS and Android.",
            solution: "Used React Native with Expo for rapid development and Firebase for backend services. Implemented optimized rendering techniques to ensure smooth performance even on older devices.",
            impact: "The app achieved a 4.8/5 star rating on both App Store and Google Play, with over 100,000 downloads in the first month.",
        },
    ),
    (
        "4",
        ProjectDetail {
            challenge: "Creating an intuitive interface for tracking finances while ensuring data privacy and security.",
            solution: "Implemented end-to-end encryption for sensitive financial data and used Vue.js with Vuex for a responsive, state-driven UI. Added interactive charts for visualizing spending patterns.",
            impact: "Users reported an average 20% increase in savings after using the app for 3 months due to better financial awareness.",
        },
    ),
    (
        "5",
        ProjectDetail {
            challenge: "Handling real-time communication at scale while ensuring messages are delivered reliably and quickly.",
            solution: "Used Socket.IO for real-time communication with a fallback mechanism for poor network conditions. Implemented message queuing to handle offline scenarios.",
            impact: "The system handles over 1 million messages per day with an average delivery time of less than 100ms.",
        },
    ),
    (
        "6",
        ProjectDetail {
            challenge: "Building a flexible task management system that adapts to different team workflows and methodologies.",
            solution: "Created a customizable kanban system where teams can define their own workflows. Implemented real-time collaboration features and automated notifications.",
            impact: "Teams using the system reported a 35% increase in productivity and 28% reduction in missed deadlines.",
        },
    ),
];
