use serde::Serialize;

use crate::i18n::Language;

/// Copy written in both site languages.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Localized {
    pub en: &'static str,
    pub tr: &'static str,
}

impl Localized {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Tr => self.tr,
        }
    }
}

/// Technology tile on the home page.
#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Proficiency bar on the about page, `value` in percent.
#[derive(Debug, Clone, Serialize)]
pub struct Proficiency {
    pub name: &'static str,
    pub value: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: Localized,
    pub company: &'static str,
    pub description: Localized,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tool {
    pub name: &'static str,
    pub icon: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", icon: "📱" },
    Skill { name: "TypeScript", icon: "🔷" },
    Skill { name: "Node.js", icon: "🟢" },
    Skill { name: "Next.js", icon: "⚡" },
    Skill { name: "Tailwind CSS", icon: "🎨" },
    Skill { name: "UX/UI Design", icon: "🎯" },
    Skill { name: "GraphQL", icon: "🔺" },
    Skill { name: "MongoDB", icon: "🍃" },
    Skill { name: "Firebase", icon: "🔥" },
    Skill { name: "AWS", icon: "☁️" },
    Skill { name: "Docker", icon: "🐳" },
    Skill { name: "Git", icon: "🔄" },
];

pub const PROFICIENCIES: &[Proficiency] = &[
    Proficiency { name: "Front-end Development", value: 95 },
    Proficiency { name: "Back-end Development", value: 85 },
    Proficiency { name: "UI/UX Design", value: 90 },
    Proficiency { name: "Mobile Development", value: 80 },
    Proficiency { name: "DevOps", value: 75 },
];

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2023 - Present",
        title: Localized { en: "Senior Developer", tr: "Kıdemli Geliştirici" },
        company: "Tech Innovations Inc.",
        description: Localized {
            en: "Leading a team of developers in creating web and mobile applications for clients across various industries.",
            tr: "Çeşitli sektörlerdeki müşteriler için web ve mobil uygulamalar oluşturan bir geliştirici ekibine liderlik etmek.",
        },
    },
    TimelineEntry {
        year: "2020 - 2023",
        title: Localized { en: "Full Stack Developer", tr: "Full Stack Geliştirici" },
        company: "Digital Solutions Co.",
        description: Localized {
            en: "Built scalable web applications using React, Node.js, and GraphQL. Implemented CI/CD pipelines and containerization.",
            tr: "React, Node.js ve GraphQL kullanarak ölçeklenebilir web uygulamaları geliştirdim. CI/CD pipelines ve konteynerleştirme uyguladım.",
        },
    },
    TimelineEntry {
        year: "2018 - 2020",
        title: Localized { en: "Front-end Developer", tr: "Front-end Geliştirici" },
        company: "Creative Web Agency",
        description: Localized {
            en: "Developed responsive websites and web applications for various clients using modern JavaScript frameworks.",
            tr: "Modern JavaScript frameworklerini kullanarak çeşitli müşteriler için duyarlı web siteleri ve web uygulamaları geliştirdim.",
        },
    },
    TimelineEntry {
        year: "2016 - 2018",
        title: Localized { en: "Junior Developer", tr: "Junior Geliştirici" },
        company: "StartUp Labs",
        description: Localized {
            en: "Started my journey in web development working on small projects and learning the fundamentals of web technologies.",
            tr: "Web geliştirme yolculuğuma küçük projeler üzerinde çalışarak ve web teknolojilerinin temellerini öğrenerek başladım.",
        },
    },
];

pub const TOOLS: &[Tool] = &[
    Tool { name: "VS Code", icon: "💻" },
    Tool { name: "GitHub", icon: "🐙" },
    Tool { name: "Docker", icon: "🐳" },
    Tool { name: "Figma", icon: "🎨" },
    Tool { name: "Jira", icon: "📋" },
    Tool { name: "Slack", icon: "💬" },
    Tool { name: "Webstorm", icon: "🔧" },
    Tool { name: "Postman", icon: "📮" },
    Tool { name: "Notion", icon: "📝" },
];
