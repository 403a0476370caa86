//! Static site content
//!
//! Everything the pages display that is not interactive state: the hero
//! line, work history, skills, projects and contact links.

use indexmap::IndexSet;

pub const HERO_TEXT: &str = "Hello, my name is Levi Mickelson";
pub const HERO_CADENCE_MS: u32 = 150;

/// How long the contact page shows "Copied!" after a copy
pub const COPY_RESET_MS: u64 = 2_000;

/// Category that matches every project
pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimelineItem {
    pub date: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub description: &'static [&'static str],
}

pub const TIMELINE: &[TimelineItem] = &[
    TimelineItem {
        date: "January 2023 - Present",
        title: "Application Developer",
        company: "CFCU Community Credit Union",
        description: &[
            "Played a key role in the transition to CFCU's new digital banking platform by developing full-stack applications for 80,000+ members.",
            "Designed and implemented frontend features using JavaScript, React, HTML, and CSS.",
            "Developed REST and SOAP APIs using Java and Spring Boot, containerized with Docker.",
            "Integrated encryption algorithms and third-party APIs to enhance data security.",
        ],
    },
    TimelineItem {
        date: "Summer 2022",
        title: "Intern",
        company: "CFCU Community Credit Union",
        description: &[
            "Created a full-stack social event platform for employees.",
            "Developed frontend using JavaScript, HTML, and CSS with features like event registration and leaderboards.",
            "Designed a REST API using Java, Spring Boot, and MongoDB.",
        ],
    },
    TimelineItem {
        date: "Summer 2021",
        title: "Intern",
        company: "Healthix",
        description: &[
            "Developed a Java-based web service for converting PDFs to text documents.",
            "Deployed using Apache Tomcat and Spring Boot.",
            "Tracked metrics with SQL Server and H2 Database.",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Java", percent: 90 },
    Skill { name: "JavaScript", percent: 85 },
    Skill { name: "Spring Boot", percent: 80 },
    Skill { name: "React", percent: 75 },
    Skill { name: "Python", percent: 75 },
    Skill { name: "Docker", percent: 65 },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub category: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Kubernetes Chaos Engineering",
        description: &[
            "Implemented and containerized a live chat application using Python Flask, MongoDB, and Docker.",
            "Deployed the application to a Kubernetes cluster on Google Cloud Platform.",
            "Used Chaos Mesh to inject faults and examine system fault tolerance.",
        ],
        technologies: &["Python", "Flask", "MongoDB", "Docker", "Kubernetes", "GCP", "Chaos Mesh"],
        github_url: Some("https://github.com/levi1462/kubernetes-chaos-engineering"),
        category: "Programming",
    },
    Project {
        id: 2,
        title: "Python Socket Programming",
        description: &[
            "Engineered a multi-threaded proxy and webserver using Python socket programming.",
            "Implemented proxy server caching to reduce webserver load.",
            "Developed safe termination protocols for server threads.",
        ],
        technologies: &["Python", "Socket Programming", "Multi-threading", "Caching"],
        github_url: Some("https://github.com/levi1462/python-socket-programming"),
        category: "Programming",
    },
    Project {
        id: 3,
        title: "Stock Market Price Prediction using RNNs",
        description: &[
            "Implemented and extended a research paper on stock market prediction using PyTorch and NumPy.",
            "Adapted models for S&P 500 and Apple stock data, incorporating additional features.",
            "Introduced Bidirectional LSTM (BLSTM) and optimized existing models.",
            "Conducted comprehensive evaluations using Python Pandas.",
        ],
        technologies: &["Python", "PyTorch", "NumPy", "Pandas", "Machine Learning", "RNN", "LSTM"],
        github_url: Some("https://github.com/levi1462/stock-market-prediction-rnn"),
        category: "Machine Learning",
    },
    Project {
        id: 4,
        title: "Responsive Portfolio Website",
        description: &[
            "Designed and developed a personal portfolio website using React and Next.js.",
            "Implemented responsive design principles to ensure optimal viewing across all devices.",
            "Utilized Tailwind CSS for efficient and consistent styling.",
            "Incorporated smooth animations and transitions for enhanced user experience.",
        ],
        technologies: &["React", "Next.js", "Tailwind CSS", "Framer Motion"],
        github_url: Some("https://github.com/levi1462/portfolio-website"),
        category: "Web Design",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

pub const CONTACT: ContactInfo = ContactInfo {
    email: "levi.mickelson@example.com",
    github: "https://github.com/levi1462",
    linkedin: "https://www.linkedin.com/in/levi-mickelson",
};

/// Filter options: "All" followed by each category in first-seen order
pub fn categories() -> Vec<&'static str> {
    let mut seen = IndexSet::new();
    seen.insert(ALL_CATEGORIES);
    seen.extend(PROJECTS.iter().map(|p| p.category));
    seen.into_iter().collect()
}

pub fn is_category(name: &str) -> bool {
    name == ALL_CATEGORIES || PROJECTS.iter().any(|p| p.category == name)
}

/// Projects shown for a category, in listing order
pub fn filter_projects(category: &str) -> impl Iterator<Item = &'static Project> + '_ {
    PROJECTS
        .iter()
        .filter(move |p| category == ALL_CATEGORIES || p.category == category)
}

pub fn project(id: u32) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
