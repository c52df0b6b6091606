//! Static portfolio content
//!
//! Everything the page shows and everything the assistant is told about the
//! owner lives here, so a new owner only edits this file.

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub description: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub cgpa: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

/// Headline figure shown in the highlight bar under the hero
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
}

pub const OWNER_NAME: &str = "HELLY PATEL";
pub const OWNER_EMAIL: &str = "231263107037setice@gmail.com";
pub const OWNER_LOCATION: &str = "Ahmedabad, Gujarat";

pub const HERO_TAGLINE: &str = "Android Developer • UI/UX Enthusiast";
pub const HERO_TITLE: [&str; 2] = ["Transforming Ideas", "Into Experiences."];
pub const HERO_SUBTITLE: &str =
    "Building robust mobile applications with a focus on seamless design and scalable architecture.";
pub const HERO_STATUS: &str = "Open for Opportunities";

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight { value: "BE", label: "Computer Eng." },
    Highlight { value: "Android", label: "Specialization" },
    Highlight { value: "Intern", label: "CreArt & IBM" },
    Highlight { value: "UI/UX", label: "Design Focused" },
];

pub const EXPERIENCE_BLURB: &str =
    "My journey through high-impact internships and training programs.";
pub const SKILLS_BLURB: &str = "A blend of core engineering and modern mobile technologies.";

pub const FOOTER_TAGS: [&str; 3] = ["Android Dev", "UI/UX Designer", "Computer Engineer"];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce App",
        date: "Aug 2025",
        description: "Built an Android-based E-commerce app in Java using Android Studio with basic features like product display, add-to-cart, and order flow.",
        technologies: &["Android Studio", "Java", "Mobile UI"],
        image_url: "https://images.unsplash.com/photo-1472851294608-062f824d29cc?auto=format&fit=crop&q=80&w=800",
    },
    Project {
        title: "Library Management System",
        date: "Feb 2025",
        description: "Designed a database system to manage books, members, and transactions with SQL CRUD queries, joins, and reports. Built a simple interface for book issue/return and fine calculation.",
        technologies: &["SQL", "MySQL", "Java"],
        image_url: "https://images.unsplash.com/photo-1507842217343-583bb7270b66?auto=format&fit=crop&q=80&w=800",
    },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "CreArt Solution Pvt. Ltd",
        role: "Android Development Intern",
        location: "Ahmedabad, Gujarat",
        date: "July 2025",
        description: &[
            "Developed and tested mobile applications using Java, XML, and Android Studio.",
            "Designed UI layouts and improved app responsiveness for better user experience.",
            "Collaborated with the team to debug, optimize, and enhance application features.",
        ],
    },
    Experience {
        company: "CSRBOX (IBM Skill Build Training)",
        role: "Artificial Intelligence Intern",
        location: "Ahmedabad, Gujarat",
        date: "July 2025",
        description: &[
            "Gained hands-on experience in AI concepts, machine learning models, and problem-solving.",
            "Specialized in Artificial Intelligence and Machine Learning with hands-on knowledge of model development and data analysis using Python.",
        ],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        institution: "Sal Engineering and Technical Institute",
        degree: "B.E - Computer Engineering",
        location: "Ahmedabad, Gujarat",
        date: "2023 – 2026",
        cgpa: "7",
    },
    Education {
        institution: "L. J. Institute of Engineering and Technology",
        degree: "Diploma - Computer Engineering",
        location: "Ahmedabad, Gujarat",
        date: "2020 – 2023",
        cgpa: "7.76",
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        category: "Languages",
        skills: &["Python", "Java", "C", "C++", "JavaScript", "SQL", "NoSQL", "XML"],
    },
    SkillCategory {
        category: "Mobile & UI/UX",
        skills: &[
            "Android Development",
            "Flutter",
            "XML Layouts",
            "Responsive Design",
            "UI Integration",
        ],
    },
    SkillCategory {
        category: "Tools & Backend",
        skills: &["Android Studio", "VS Code", "Firebase", "Oracle DB", "GitHub", "Linux"],
    },
];

pub const CERTIFICATIONS: &[&str] = &["UI/UX Course", "Webinar-kotlin", "Software Testing", "SQL"];

/// First assistant turn of every session
pub const GREETING: &str =
    "Hi! I'm Helly's AI Assistant. Ask me anything about her skills, experience, or projects!";

/// Assistant turn used when the service answers with no text
pub const EMPTY_REPLY_FALLBACK: &str =
    "I'm sorry, I couldn't process that. Feel free to reach out to Helly directly!";

/// Assistant turn used when the request fails for any reason
pub const CONNECTION_ERROR_FALLBACK: &str =
    "There was an error connecting to my brain. Please try again later!";

// Sent with every request. Contains the owner's contact details on purpose.
pub const SYSTEM_INSTRUCTION: &str = "\
You are the AI Assistant for Helly Patel's professional portfolio.
Your goal is to answer questions from recruiters or collaborators about Helly's background, skills, and projects.

CONTEXT ABOUT HELLY:
- Name: Helly Patel
- Role: Android Developer & UI/UX Enthusiast
- Location: Ahmedabad, Gujarat
- Contact: 231263107037setice@gmail.com, +91-9904004195
- Education: B.E in Computer Engineering from SAL Engineering (2023-2026, CGPA 7), Diploma from LJ Institute (2020-2023, CGPA 7.76).
- Experience: Android Intern at CreArt Solution, AI Intern at CSRBOX.
- Top Skills: Java, Python, Android Studio, Flutter, SQL, UI/UX Design.
- Projects: E-Commerce App (Android/Java), Library Management System (SQL/Java).

GUIDELINES:
- Be professional, friendly, and concise.
- If asked about contact info, provide it clearly.
- If asked about something not in the resume, politely state you don't have that information but invite them to contact Helly directly.
- Highlight Helly's strengths in mobile development and user experience.
";
