use leptos::prelude::*;

use crate::components::icons::{
    Activity, Award, Book, BookOpen, Building, Code, Cpu, Download, Eye, FileText, GitBranch,
    Github, Globe, GraduationCap, Lightbulb, Mail, MessageSquare, Package, Rocket, Shield,
    Sparkles, Target, Terminal, TrendingUp, Users, Video, Zap,
};

/// Icon, heading and one line of copy
pub struct Feature {
    pub icon: fn() -> AnyView,
    pub title: &'static str,
    pub desc: &'static str,
}

/// A feature card with a checklist underneath
pub struct Capability {
    pub icon: fn() -> AnyView,
    pub title: &'static str,
    pub desc: &'static str,
    pub items: &'static [&'static str],
}

pub struct Step {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// One cell of a plan comparison table
#[derive(Clone, Copy)]
pub enum Availability {
    Included,
    Excluded,
    Limited(&'static str),
}

use Availability::{Excluded as No, Included as Yes, Limited};

// ─────────────────────────────────────────────────────────────────
// Home
// ─────────────────────────────────────────────────────────────────

pub fn problems() -> Vec<&'static str> {
    vec![
        "Proprietary EDA licenses slowing innovation",
        "Manual, error-prone workflows",
        "Fragmented toolchains and limited interoperability",
        "Steep learning curves and high entry barriers",
    ]
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: || view! { <Code class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Open-Source EDA Tools",
            desc: "Complete synthesis, simulation, and verification suite, all free to use",
        },
        Feature {
            icon: || view! { <Shield class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Open PDKs for 180nm",
            desc: "Production-ready process design kits with full documentation",
        },
        Feature {
            icon: || view! { <Zap class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Reusable IP Library",
            desc: "Pre-verified, modular blocks with version control",
        },
        Feature {
            icon: || view! { <Github class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Python-Based Workflows",
            desc: "Scriptable flows with GenAI assistance for automation",
        },
    ]
}

pub fn idea_to_tapeout() -> Vec<Step> {
    vec![
        Step { title: "Design in RTL / Python", desc: "Write Verilog or use Python DSL" },
        Step { title: "GenAI Assistance", desc: "AI suggests flows, debugs, optimizes" },
        Step { title: "Automated CI/CD", desc: "Run synthesis, place & route" },
        Step { title: "Tapeout-Ready", desc: "GDS files for 180nm fabrication" },
    ]
}

pub fn platform_highlights() -> Vec<&'static str> {
    vec![
        "GenAI Assistance: Suggests flows, debugs errors, optimises designs",
        "CI/CD Pipelines: Automates repetitive tasks and regression testing",
        "Open Tools & IPs: Modular, reusable, and vendor-neutral",
        "Reproducible Environments: Easy onboarding and consistent results",
    ]
}

pub fn audiences() -> Vec<Step> {
    vec![
        Step {
            title: "Startup Tape-Outs",
            desc: "Accelerate iterations, reduce costs, and prototype faster with open tools and automated pipelines.",
        },
        Step {
            title: "Enterprise Silicon Teams",
            desc: "Modernise internal workflows using software-style development and AI assistance without disrupting existing infrastructure.",
        },
        Step {
            title: "Academic & Research",
            desc: "Teach practical, real-world chip design using open-source tools, PDKs, and reproducible workflows.",
        },
        Step {
            title: "Open Hardware Projects",
            desc: "Collaborate globally, share IPs, and ensure designs are reproducible and modular.",
        },
    ]
}

pub fn contact_reasons() -> Vec<&'static str> {
    vec![
        "Evaluating open, AI-enabled EDA workflows",
        "Building software-like pipelines for chip design",
        "Collaborating on open PDKs, IPs, or educational programs",
    ]
}

// ─────────────────────────────────────────────────────────────────
// Platform
// ─────────────────────────────────────────────────────────────────

pub fn capabilities() -> Vec<Capability> {
    vec![
        Capability {
            icon: || view! { <Code class="w-10 h-10 text-orange-500" /> }.into_any(),
            title: "Open-Source EDA Tools",
            desc: "Complete suite of synthesis, simulation, and verification",
            items: &[
                "Yosys for RTL synthesis",
                "Verilator for simulation",
                "OpenROAD for place & route",
                "Magic for layout editing",
            ],
        },
        Capability {
            icon: || view! { <Cpu class="w-10 h-10 text-orange-500" /> }.into_any(),
            title: "Open PDK for 180nm",
            desc: "Production-ready process design kit",
            items: &[
                "Standard cell library",
                "I/O cells and pads",
                "Design rules (DRC/LVS)",
                "Extraction models",
            ],
        },
        Capability {
            icon: || view! { <GitBranch class="w-10 h-10 text-orange-500" /> }.into_any(),
            title: "Reusable IP Blocks",
            desc: "Pre-verified modular components",
            items: &[
                "Digital peripherals",
                "Memory controllers",
                "Interface protocols",
                "Version controlled",
            ],
        },
        Capability {
            icon: || view! { <Terminal class="w-10 h-10 text-orange-500" /> }.into_any(),
            title: "Python Workflows",
            desc: "Scriptable automation with GenAI",
            items: &[
                "Python-based DSL",
                "AI-assisted debugging",
                "Automated optimization",
                "CI/CD integration",
            ],
        },
    ]
}

pub fn technical_specs() -> Vec<Stat> {
    vec![
        Stat { label: "Process Node", value: "180nm" },
        Stat { label: "Voltage", value: "1.8V / 3.3V" },
        Stat { label: "Design Languages", value: "Verilog, VHDL, Python" },
        Stat { label: "Operating System", value: "Linux, macOS" },
        Stat { label: "License", value: "Apache 2.0" },
        Stat { label: "Community", value: "Open source" },
    ]
}

pub fn development_workflow() -> Vec<Step> {
    vec![
        Step { title: "Design", desc: "Write RTL in Verilog or use Python DSL" },
        Step { title: "Synthesize", desc: "Convert RTL to gate-level netlist" },
        Step { title: "Place & Route", desc: "Physical implementation for 180nm" },
        Step { title: "Verify", desc: "DRC/LVS checks and tapeout" },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Use cases
// ─────────────────────────────────────────────────────────────────

pub struct UseCase {
    pub icon: fn() -> AnyView,
    pub title: &'static str,
    pub desc: &'static str,
    pub benefits: &'static [&'static str],
    pub case_study: &'static str,
}

pub fn use_cases() -> Vec<UseCase> {
    vec![
        UseCase {
            icon: || view! { <Rocket class="w-12 h-12 text-orange-500" /> }.into_any(),
            title: "Startup Tape-Outs",
            desc: "Accelerate iterations, reduce costs, and prototype faster with open tools and automated pipelines",
            benefits: &[
                "Zero licensing costs",
                "Rapid prototyping cycles",
                "Access to 180nm PDK",
                "Community support",
                "Python automation",
            ],
            case_study: "TechStartup Inc. reduced time-to-tapeout by 40% using our platform",
        },
        UseCase {
            icon: || view! { <GraduationCap class="w-12 h-12 text-orange-500" /> }.into_any(),
            title: "Academic Research",
            desc: "Teach practical, real-world chip design using open-source tools and reproducible workflows",
            benefits: &[
                "Free for education",
                "Learning materials included",
                "Real-world experience",
                "Publication-ready results",
                "Reproducible environments",
            ],
            case_study: "University research labs published 15+ papers using the platform",
        },
        UseCase {
            icon: || view! { <Globe class="w-12 h-12 text-orange-500" /> }.into_any(),
            title: "Open Hardware Projects",
            desc: "Collaborate globally, share IPs, and ensure designs are reproducible and modular",
            benefits: &[
                "Global collaboration",
                "Version-controlled IPs",
                "Transparent processes",
                "Community-driven",
                "Cross-platform compatible",
            ],
            case_study: "Open Hardware Initiative built 200+ reusable IP blocks",
        },
        UseCase {
            icon: || view! { <Building class="w-12 h-12 text-orange-500" /> }.into_any(),
            title: "Enterprise Teams",
            desc: "Modernize internal workflows using Python-based development and AI assistance",
            benefits: &[
                "Integrate with existing tools",
                "AI-assisted debugging",
                "Automated CI/CD",
                "Team collaboration",
                "Reproducible builds",
            ],
            case_study: "Global Semiconductor Corp. improved productivity by 60%",
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Pricing
// ─────────────────────────────────────────────────────────────────

pub struct Tier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub desc: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub link: &'static str,
    pub highlighted: bool,
}

pub fn tiers() -> Vec<Tier> {
    vec![
        Tier {
            name: "Free",
            price: "$0",
            period: "Forever",
            desc: "Open-source tools + basic workflows",
            features: &[
                "All open-source EDA tools",
                "Complete 180nm PDK",
                "Standard cell library",
                "Public IP library access",
                "Community support",
                "Basic documentation",
                "CLI tools",
                "Open-source license (Apache 2.0)",
            ],
            cta: "Download",
            link: "/downloads",
            highlighted: false,
        },
        Tier {
            name: "Starter",
            price: "Custom",
            period: "Contact us",
            desc: "AI-assisted workflows + collaboration",
            features: &[
                "Everything in Free",
                "GenAI-assisted design",
                "Python automation tools",
                "Advanced debugging with AI",
                "Team collaboration (up to 10 users)",
                "Priority email support",
                "Advanced documentation",
                "Monthly office hours",
                "API access",
            ],
            cta: "Contact Us",
            link: "/contact",
            highlighted: true,
        },
        Tier {
            name: "Business",
            price: "Custom",
            period: "Contact us",
            desc: "Advanced automation + enterprise support",
            features: &[
                "Everything in Starter",
                "Advanced CI/CD pipelines",
                "Custom GenAI training",
                "Unlimited team members",
                "Dedicated support channel",
                "SLA guarantees",
                "Custom integrations",
                "Quarterly business reviews",
                "Advanced analytics",
            ],
            cta: "Contact Us",
            link: "/contact",
            highlighted: false,
        },
        Tier {
            name: "Custom",
            price: "Contact Us",
            period: "Enterprise",
            desc: "Tailored solutions for large teams",
            features: &[
                "Everything in Business",
                "On-premise deployment",
                "Custom PDK development",
                "Dedicated infrastructure",
                "White-label options",
                "24/7 premium support",
                "Dedicated account manager",
                "Custom feature development",
                "Training and onboarding",
            ],
            cta: "Contact Us",
            link: "/contact",
            highlighted: false,
        },
    ]
}

pub struct PlanRow {
    pub feature: &'static str,
    pub cells: [Availability; 4],
}

pub fn plan_comparison() -> Vec<PlanRow> {
    vec![
        PlanRow { feature: "Open-source EDA tools", cells: [Yes, Yes, Yes, Yes] },
        PlanRow { feature: "180nm PDK", cells: [Yes, Yes, Yes, Yes] },
        PlanRow { feature: "Community support", cells: [Yes, Yes, Yes, Yes] },
        PlanRow { feature: "GenAI assistance", cells: [No, Yes, Yes, Yes] },
        PlanRow { feature: "Python workflows", cells: [No, Yes, Yes, Yes] },
        PlanRow {
            feature: "Team collaboration",
            cells: [No, Limited("10 users"), Limited("Unlimited"), Limited("Unlimited")],
        },
        PlanRow { feature: "CI/CD pipelines", cells: [No, No, Yes, Yes] },
        PlanRow {
            feature: "Priority support",
            cells: [No, Limited("Email"), Limited("Dedicated"), Limited("24/7")],
        },
        PlanRow { feature: "On-premise deployment", cells: [No, No, No, Yes] },
        PlanRow { feature: "Custom development", cells: [No, No, No, Yes] },
    ]
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub fn faqs() -> Vec<Faq> {
    vec![
        Faq {
            question: "Are the tools really free?",
            answer: "Yes! All open-source EDA tools and the 180nm PDK are completely free. You only pay for AI assistance, automation, collaboration features, and enterprise support.",
        },
        Faq {
            question: "What process node do you support?",
            answer: "We currently support 180nm process technology with plans to add more nodes in the future based on community demand.",
        },
        Faq {
            question: "Can I use Python for chip design?",
            answer: "Yes! Our platform supports Python-based workflows and includes a Python DSL for hardware description, along with GenAI assistance for optimization.",
        },
        Faq {
            question: "Do you offer educational discounts?",
            answer: "Yes! Academic institutions and research labs can access premium features at reduced rates. Contact us for details about our educational programs.",
        },
        Faq {
            question: "What kind of support is included?",
            answer: "Free tier includes community support. Starter includes priority email support. Business includes dedicated support channels with SLA. Custom includes 24/7 premium support.",
        },
        Faq {
            question: "Can I try Pro features before committing?",
            answer: "Yes! We offer a 30-day trial of Starter tier features. Contact us to get started with your trial.",
        },
        Faq {
            question: "What is GenAI assistance?",
            answer: "GenAI assistance uses artificial intelligence to help you debug designs, optimize workflows, suggest improvements, and automate repetitive tasks in your chip design process.",
        },
        Faq {
            question: "Do you support on-premise deployment?",
            answer: "Yes! On-premise deployment is available with our Custom tier for enterprises that need to keep their design data within their own infrastructure.",
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Downloads
// ─────────────────────────────────────────────────────────────────

pub fn release_contents() -> Vec<&'static str> {
    vec![
        "Complete 180nm PDK",
        "All open-source EDA tools",
        "Python workflow support",
        "GenAI assistance",
        "Standard cell library",
    ]
}

pub fn system_requirements() -> Vec<&'static str> {
    vec![
        "Windows 10/11, Linux (Ubuntu 20.04+, Fedora 34+) or macOS 11+",
        "8 GB RAM minimum (16 GB recommended)",
        "10 GB free disk space",
        "Python 3.8 or higher",
        "Git installed",
    ]
}

pub fn quick_start() -> Vec<&'static str> {
    vec![
        "Download and extract the archive",
        "Run the installation script",
        "Follow the getting started guide",
        "Create your first chip design",
    ]
}

// ─────────────────────────────────────────────────────────────────
// Docs
// ─────────────────────────────────────────────────────────────────

pub struct Guide {
    pub title: &'static str,
    pub desc: &'static str,
    pub time: &'static str,
    pub level: &'static str,
}

pub fn popular_guides() -> Vec<Guide> {
    vec![
        Guide {
            title: "Your First 180nm Chip",
            desc: "Complete RTL-to-GDS tutorial",
            time: "30 min",
            level: "Beginner",
        },
        Guide {
            title: "Python-Based Design",
            desc: "Using Python DSL for hardware",
            time: "20 min",
            level: "Intermediate",
        },
        Guide {
            title: "GenAI Workflows",
            desc: "AI-assisted optimization",
            time: "25 min",
            level: "Advanced",
        },
    ]
}

/// Tailwind classes for a difficulty pill
pub fn level_class(level: &str) -> &'static str {
    match level {
        "Beginner" => "px-3 py-1 rounded-full text-sm bg-green-100 text-green-700",
        "Intermediate" => "px-3 py-1 rounded-full text-sm bg-yellow-100 text-yellow-700",
        _ => "px-3 py-1 rounded-full text-sm bg-orange-100 text-orange-700",
    }
}

/// Icon for a documentation category, by its title
pub fn doc_category_icon(title: &str) -> AnyView {
    match title {
        "Getting Started" => view! { <Book class="w-8 h-8 text-orange-500" /> }.into_any(),
        "EDA Tools" => view! { <Code class="w-8 h-8 text-orange-500" /> }.into_any(),
        "180nm PDK" => view! { <Cpu class="w-8 h-8 text-orange-500" /> }.into_any(),
        _ => view! { <Terminal class="w-8 h-8 text-orange-500" /> }.into_any(),
    }
}

pub fn doc_extras() -> Vec<Capability> {
    vec![
        Capability {
            icon: || view! { <Video class="w-10 h-10 text-orange-500 mx-auto mb-4" /> }.into_any(),
            title: "Video Tutorials",
            desc: "Step-by-step guides",
            items: &["30+ videos"],
        },
        Capability {
            icon: || view! { <FileText class="w-10 h-10 text-orange-500 mx-auto mb-4" /> }.into_any(),
            title: "Case Studies",
            desc: "Real implementations",
            items: &["15+ case studies"],
        },
        Capability {
            icon: || view! { <Book class="w-10 h-10 text-orange-500 mx-auto mb-4" /> }.into_any(),
            title: "API Reference",
            desc: "Complete documentation",
            items: &["Full reference"],
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Contact
// ─────────────────────────────────────────────────────────────────

pub struct ContactMethod {
    pub icon: fn() -> AnyView,
    pub title: &'static str,
    pub desc: &'static str,
    pub contact: &'static str,
}

pub fn contact_methods() -> Vec<ContactMethod> {
    vec![
        ContactMethod {
            icon: || view! { <Mail class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Email",
            desc: "General inquiries",
            contact: "hello@ignytion.io",
        },
        ContactMethod {
            icon: || view! { <MessageSquare class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Forum",
            desc: "Community support",
            contact: "community.ignytion.io",
        },
        ContactMethod {
            icon: || view! { <Github class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "GitHub",
            desc: "Open source",
            contact: "github.com/ignytion",
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Products
// ─────────────────────────────────────────────────────────────────

pub struct Edition {
    pub icon: fn() -> AnyView,
    pub name: &'static str,
    pub desc: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub badge: &'static str,
    pub cta: &'static str,
    pub link: &'static str,
}

pub fn editions() -> Vec<Edition> {
    vec![
        Edition {
            icon: || view! { <Sparkles class="w-12 h-12 text-orange-500" /> }.into_any(),
            name: "Free Edition",
            desc: "Perfect for individual developers and small teams getting started.",
            price: "Free",
            features: &[
                "Core semiconductor design tools",
                "Basic process simulation",
                "Community support",
                "Monthly updates",
                "Single user license",
                "5 GB cloud storage",
                "Standard documentation",
                "Email support (48h response)",
            ],
            badge: "Most Popular",
            cta: "Download Free",
            link: "/downloads",
        },
        Edition {
            icon: || view! { <Building class="w-12 h-12 text-orange-500" /> }.into_any(),
            name: "Enterprise Edition",
            desc: "Advanced features and support for large-scale semiconductor operations.",
            price: "Custom Pricing",
            features: &[
                "All Free Edition features",
                "Advanced AI-powered analysis",
                "Unlimited users",
                "Priority 24/7 support",
                "Custom integrations",
                "Unlimited cloud storage",
                "Dedicated account manager",
                "On-premise deployment option",
                "Advanced security & compliance",
                "Custom training programs",
                "API access with higher limits",
                "White-label options",
            ],
            badge: "Enterprise",
            cta: "Contact Sales",
            link: "/about",
        },
    ]
}

pub struct EditionGroup {
    pub category: &'static str,
    pub rows: Vec<(&'static str, [Availability; 2])>,
}

pub fn edition_comparison() -> Vec<EditionGroup> {
    vec![
        EditionGroup {
            category: "Design Tools",
            rows: vec![
                ("Circuit Design", [Yes, Yes]),
                ("Layout Editor", [Yes, Yes]),
                ("AI-Powered Optimization", [No, Yes]),
                ("Advanced Simulation", [No, Yes]),
            ],
        },
        EditionGroup {
            category: "Collaboration",
            rows: vec![
                ("Team Workspaces", [Limited("Up to 3"), Limited("Unlimited")]),
                ("Version Control", [Yes, Yes]),
                ("Real-time Collaboration", [No, Yes]),
                ("Project Templates", [Limited("Basic"), Limited("Advanced")]),
            ],
        },
        EditionGroup {
            category: "Support & Services",
            rows: vec![
                ("Documentation", [Yes, Yes]),
                ("Email Support", [Limited("48h"), Limited("2h")]),
                ("Phone Support", [No, Yes]),
                ("Dedicated Manager", [No, Yes]),
            ],
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// About
// ─────────────────────────────────────────────────────────────────

pub fn company_stats() -> Vec<Stat> {
    vec![
        Stat { value: "2019", label: "Founded" },
        Stat { value: "50+", label: "Team Members" },
        Stat { value: "10K+", label: "Customers" },
        Stat { value: "50+", label: "Countries" },
    ]
}

pub fn values() -> Vec<Feature> {
    vec![
        Feature {
            icon: || view! { <Target class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Innovation First",
            desc: "We push the boundaries of what's possible in semiconductor software.",
        },
        Feature {
            icon: || view! { <Users class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Customer Success",
            desc: "Your success is our success. We're committed to helping you achieve your goals.",
        },
        Feature {
            icon: || view! { <Lightbulb class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Continuous Learning",
            desc: "We stay ahead of industry trends to deliver cutting-edge solutions.",
        },
        Feature {
            icon: || view! { <Award class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Quality Excellence",
            desc: "We maintain the highest standards in every aspect of our products.",
        },
    ]
}

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

pub fn leadership() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Sarah Johnson",
            role: "CEO & Founder",
            image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330",
        },
        TeamMember {
            name: "Michael Chen",
            role: "CTO",
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d",
        },
        TeamMember {
            name: "Emily Rodriguez",
            role: "Head of Product",
            image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80",
        },
        TeamMember {
            name: "David Kim",
            role: "Lead Engineer",
            image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e",
        },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Resources
// ─────────────────────────────────────────────────────────────────

pub fn resource_categories() -> Vec<Capability> {
    vec![
        Capability {
            icon: || view! { <BookOpen class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Documentation",
            desc: "Complete guides and API references",
            items: &["150+ Articles"],
        },
        Capability {
            icon: || view! { <Video class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Video Tutorials",
            desc: "Step-by-step video guides",
            items: &["45+ Videos"],
        },
        Capability {
            icon: || view! { <FileText class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Case Studies",
            desc: "Real-world success stories",
            items: &["20+ Stories"],
        },
        Capability {
            icon: || view! { <Code class="w-8 h-8 text-orange-500" /> }.into_any(),
            title: "Code Examples",
            desc: "Sample projects and snippets",
            items: &["100+ Examples"],
        },
    ]
}

pub fn popular_articles() -> Vec<Guide> {
    vec![
        Guide {
            title: "Getting Started Guide",
            desc: "Learn the basics and set up your first project",
            level: "Beginner",
            time: "10 min read",
        },
        Guide {
            title: "Advanced Simulation Techniques",
            desc: "Master complex simulation scenarios",
            level: "Advanced",
            time: "25 min read",
        },
        Guide {
            title: "API Integration Guide",
            desc: "Connect IGNYTION with your existing tools",
            level: "Integration",
            time: "15 min read",
        },
        Guide {
            title: "Performance Optimization",
            desc: "Tips to maximize speed and efficiency",
            level: "Performance",
            time: "20 min read",
        },
        Guide {
            title: "Security Best Practices",
            desc: "Keep your projects secure and compliant",
            level: "Security",
            time: "12 min read",
        },
        Guide {
            title: "Troubleshooting Common Issues",
            desc: "Solutions to frequently encountered problems",
            level: "Support",
            time: "8 min read",
        },
    ]
}

pub struct Tutorial {
    pub title: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub thumbnail: &'static str,
}

pub fn video_tutorials() -> Vec<Tutorial> {
    vec![
        Tutorial {
            title: "Introduction to IGNYTION",
            duration: "12:45",
            level: "Beginner",
            thumbnail: "https://images.unsplash.com/photo-1516321318423-f06f85e504b3",
        },
        Tutorial {
            title: "Building Your First Chip Design",
            duration: "28:30",
            level: "Intermediate",
            thumbnail: "https://images.unsplash.com/photo-1581092795360-fd1ca04f0952",
        },
        Tutorial {
            title: "Advanced Process Automation",
            duration: "35:15",
            level: "Advanced",
            thumbnail: "https://images.unsplash.com/photo-1517694712202-14dd9538aa97",
        },
    ]
}

pub struct Asset {
    pub title: &'static str,
    pub kind: &'static str,
    pub size: &'static str,
}

pub fn downloadable_assets() -> Vec<Asset> {
    vec![
        Asset { title: "IGNYTION Quick Reference Guide", kind: "PDF", size: "2.5 MB" },
        Asset { title: "API Documentation", kind: "PDF", size: "5.8 MB" },
        Asset { title: "Sample Projects Pack", kind: "ZIP", size: "45 MB" },
    ]
}

// ─────────────────────────────────────────────────────────────────
// Admin
// ─────────────────────────────────────────────────────────────────

pub struct Metric {
    pub icon: fn() -> AnyView,
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub fn traffic_metrics() -> Vec<Metric> {
    vec![
        Metric {
            icon: || view! { <Users class="w-6 h-6 text-orange-500" /> }.into_any(),
            label: "Total Visitors",
            value: "12,543",
            change: "+12.5%",
        },
        Metric {
            icon: || view! { <Download class="w-6 h-6 text-orange-500" /> }.into_any(),
            label: "Downloads",
            value: "3,241",
            change: "+8.2%",
        },
        Metric {
            icon: || view! { <Eye class="w-6 h-6 text-orange-500" /> }.into_any(),
            label: "Page Views",
            value: "45,832",
            change: "+15.3%",
        },
        Metric {
            icon: || view! { <Activity class="w-6 h-6 text-orange-500" /> }.into_any(),
            label: "Active Users",
            value: "892",
            change: "+5.7%",
        },
    ]
}

pub fn release_metrics() -> Vec<Metric> {
    vec![
        Metric {
            icon: || view! { <Download class="w-4 h-4 text-gray-400" /> }.into_any(),
            label: "Total Downloads",
            value: "12,450",
            change: "+12.5%",
        },
        Metric {
            icon: || view! { <Users class="w-4 h-4 text-gray-400" /> }.into_any(),
            label: "Active Users",
            value: "8,234",
            change: "+8.2%",
        },
        Metric {
            icon: || view! { <Package class="w-4 h-4 text-gray-400" /> }.into_any(),
            label: "Published Versions",
            value: "24",
            change: "+2",
        },
        Metric {
            icon: || view! { <TrendingUp class="w-4 h-4 text-gray-400" /> }.into_any(),
            label: "Growth Rate",
            value: "23.5%",
            change: "+3.1%",
        },
    ]
}

pub struct PageTraffic {
    pub page: &'static str,
    pub views: &'static str,
    pub percentage: u8,
}

pub fn top_pages() -> Vec<PageTraffic> {
    vec![
        PageTraffic { page: "/downloads", views: "15,234", percentage: 33 },
        PageTraffic { page: "/", views: "12,456", percentage: 27 },
        PageTraffic { page: "/platform", views: "8,932", percentage: 20 },
        PageTraffic { page: "/pricing", views: "5,421", percentage: 12 },
        PageTraffic { page: "/docs", views: "3,789", percentage: 8 },
    ]
}

pub fn top_countries() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("\u{1F1FA}\u{1F1F8}", "United States", "4,532"),
        ("\u{1F1EE}\u{1F1F3}", "India", "2,341"),
        ("\u{1F1EC}\u{1F1E7}", "United Kingdom", "1,876"),
        ("\u{1F1E9}\u{1F1EA}", "Germany", "1,234"),
        ("\u{1F1E8}\u{1F1F3}", "China", "987"),
    ]
}

pub struct DownloadRow {
    pub version: &'static str,
    pub platform: &'static str,
    pub count: u32,
    pub date: &'static str,
}

pub fn recent_downloads() -> Vec<DownloadRow> {
    vec![
        DownloadRow { version: "1.0.0", platform: "Linux", count: 1543, date: "2025-12-25" },
        DownloadRow { version: "1.0.0", platform: "macOS", count: 1298, date: "2025-12-25" },
        DownloadRow { version: "0.9.5", platform: "Linux", count: 245, date: "2025-12-24" },
        DownloadRow { version: "0.9.5", platform: "macOS", count: 155, date: "2025-12-24" },
    ]
}
