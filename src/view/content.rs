// src/view/content.rs
//! Everything the page says, as data.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub anchor: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Highlight {
    pub headline: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Experience {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub highlights: &'static [Highlight],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tool {
    pub name: &'static str,
    pub icon: &'static str,
    pub invert: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Contact {
    pub email: &'static str,
    pub phone_display: &'static str,
    pub phone_dial: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResumeDownload {
    pub href: &'static str,
    pub file_name: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Portfolio {
    pub name: &'static str,
    pub initials: &'static str,
    pub greeting: &'static str,
    pub summary: &'static str,
    pub headshot: &'static str,
    pub headshot_alt: &'static str,
    pub titles: &'static [&'static str],
    pub nav: &'static [NavLink],
    pub resume: ResumeDownload,
    pub synergy_blurb: &'static str,
    pub experience: &'static [Experience],
    pub projects: &'static [Project],
    pub tools: &'static [Tool],
    pub education: &'static [Education],
    pub contact_blurb: &'static str,
    pub contact: Contact,
}

const fn tool(name: &'static str, icon: &'static str) -> Tool {
    Tool {
        name,
        icon,
        invert: false,
    }
}

const fn highlight(headline: &'static str, detail: &'static str) -> Highlight {
    Highlight { headline, detail }
}

pub static PORTFOLIO: Portfolio = Portfolio {
    name: "Harshit Govindarajan",
    initials: "HG",
    greeting: "Hi I am",
    summary: "With 39 months of experience in product ownership, I specialize in leading cross-functional teams, driving digital transformations, and solving complex business challenges.",
    headshot: "https://i.imgur.com/39Yg2tS.png",
    headshot_alt: "A professional headshot of Harshit Govindarajan, smiling, in a suit and tie.",
    titles: &[
        "Product Manager",
        "Product Strategist",
        "UX Advocate",
        "Agile Delivery Lead",
        "GTM Specialist",
        "CSPO",
        "Product Marketing Manager",
    ],
    nav: &[
        NavLink { anchor: "synergy", label: "Synergy" },
        NavLink { anchor: "experience", label: "Experience" },
        NavLink { anchor: "projects", label: "Projects" },
        NavLink { anchor: "education", label: "Education" },
        NavLink { anchor: "contact", label: "Contact" },
    ],
    resume: ResumeDownload {
        href: "/infosys.docx",
        file_name: "Harshit_Govindarajan_Resume.docx",
    },
    synergy_blurb: "Paste a job description below to see how my skills and experience align with the role, powered by AI.",
    experience: &[Experience {
        role: "Product Owner",
        company: "Kofluence Tech Ltd",
        period: "JAN 2021 – APR 2024",
        highlights: &[
            highlight("End-to-End B2C App Ownership", "Led the mobile app lifecycle from ideation (user interviews, market research, journey mapping) to launch, achieving 1M+ downloads and 100K+ MAU by focusing on user engagement and retention."),
            highlight("Performance Marketing Platform", "Headed development of a campaign management platform (CPC, CPA, CPM), integrating Affise and Appsflyer for analytics and Cashfree for automated payouts."),
            highlight("Agile Sprint Management", "Managed product sprints using Scrum in Azure DevOps and Jira, conducting standups, backlog grooming, and UAT to ensure timely, high-quality delivery."),
            highlight("Product Documentation & Wireframing", "Authored PRDs, defined product vision, and translated requirements into user stories. Designed prototypes and user flows in Figma, Miro, and Whimsical."),
            highlight("Marketing Automation Strategy", "Led the implementation of an omnichannel marketing system (WhatsApp, Email, SMS, Push) using CleverTap and MoEngage to craft personalized customer journeys."),
            highlight("Advanced Analytics & Data Integration", "Enabled advanced analytics by integrating data from Meta, YouTube, and Google Analytics. Built real-time dashboards for business stakeholders."),
            highlight("DIY SaaS Martech Platform", "Collaborated on a self-serve tool for D2C brands to manage influencer campaigns, reducing campaign setup TAT from 4 days to under 2 hours for 30+ brands."),
            highlight("AI-Driven WhatsApp Bot", "Designed and launched an AI-powered WhatsApp bot with Gupshup to handle customer queries, automating responses for 350+ queries daily."),
            highlight("Product Vision & Roadmap", "Partnered with leadership to shape product strategy, define quarterly roadmaps, and align feature prioritization with business objectives."),
            highlight("Internal Operations Transformation", "Launched an AI-enabled system that automated workflows for 200+ monthly campaigns, successfully onboarding and training over 200 employees."),
            highlight("Go-to-Market Strategy", "Executed GTM strategies for a new mobile app, including SEO, social media ads, and ASO, achieving a 4.5-star app rating."),
            highlight("Customer Support System", "Built a live support interface using Sendgrid and Gupshup and created a Gitbook knowledge base to streamline query resolution."),
            highlight("Standardized Testing Workflows", "Worked with the QA team to define test plans, establish regression testing cycles, and streamline defect reporting to ensure product quality."),
        ],
    }],
    projects: &[
        Project {
            title: "Kofluence Influencer Mobile App",
            description: "Owned the end-to-end development of the Kofluence mobile application, scaling it from concept to over 1 million downloads.",
            link: "#",
        },
        Project {
            title: "AI-Driven Internal Management Software",
            description: "Spearheaded the implementation of an AI/ML-driven internal management software, enabling seamless execution of 200+ marketing campaigns/month.",
            link: "#",
        },
        Project {
            title: "Finance & Payments Interface",
            description: "Developed a dedicated interface for the finance team, focusing on process optimization for over 100,000 content creators annually.",
            link: "#",
        },
    ],
    tools: &[
        tool("Figma", "https://cdn.simpleicons.org/figma/FFFFFF"),
        tool("Jira", "https://cdn.simpleicons.org/jira/FFFFFF"),
        tool("Miro", "https://cdn.simpleicons.org/miro/FFFFFF"),
        Tool {
            name: "Whimsical",
            icon: "https://www.svgrepo.com/show/354572/whimsical.svg",
            invert: true,
        },
        tool("CleverTap", "https://cdn.simpleicons.org/clevertap/FFFFFF"),
        tool("Python", "https://cdn.simpleicons.org/python/FFFFFF"),
        tool("SQL", "https://cdn.simpleicons.org/postgresql/FFFFFF"),
        tool("Power BI", "https://cdn.simpleicons.org/powerbi/FFFFFF"),
        tool("Tableau", "https://cdn.simpleicons.org/tableau/FFFFFF"),
        tool("Amplitude", "https://cdn.simpleicons.org/amplitude/FFFFFF"),
        tool("Mixpanel", "https://cdn.simpleicons.org/mixpanel/FFFFFF"),
        tool("Google Analytics", "https://cdn.simpleicons.org/googleanalytics/FFFFFF"),
        tool("AppsFlyer", "https://cdn.simpleicons.org/appsflyer/FFFFFF"),
        tool("Azure DevOps", "https://cdn.simpleicons.org/azuredevops/FFFFFF"),
        tool("Adobe", "https://cdn.simpleicons.org/adobe/FFFFFF"),
        tool("PowerPoint", "https://cdn.simpleicons.org/microsoftpowerpoint/FFFFFF"),
        tool("Excel", "https://cdn.simpleicons.org/microsoftexcel/FFFFFF"),
        tool("Notion", "https://cdn.simpleicons.org/notion/FFFFFF"),
    ],
    education: &[
        Education {
            degree: "Post Graduate Program in Management (PGPM)",
            institution: "Great Lakes Institute of Management, Chennai",
            period: "2024 - Present",
            note: "Awarded: Dean’s List",
        },
        Education {
            degree: "BBA (Marketing)",
            institution: "Christ University, Bengaluru",
            period: "Graduated March 2020",
            note: "GPA: 3.49 / 4.0",
        },
    ],
    contact_blurb: "I'm currently open to new opportunities in Product Management. If you have a project in mind or just want to connect, feel free to reach out. Let's create something amazing together!",
    contact: Contact {
        email: "harshit.govindarajan@gmail.com",
        phone_display: "+91 88672 46327",
        phone_dial: "+918867246327",
    },
};
