//! Built-in default record used to seed the store on first run.

use crate::models::portfolio::{
    Education, Experience, Link, PortfolioRecord, Profile, Project,
};

pub fn seed_record() -> PortfolioRecord {
    PortfolioRecord {
        profile: Profile {
            name: "Alex Doe".to_string(),
            title: "Senior Frontend Engineer".to_string(),
            location: "San Francisco, CA".to_string(),
            email: "alex.doe@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            summary: "Creative and detail-oriented Senior Frontend Engineer with over 8 years \
                      of experience in building and maintaining responsive and user-friendly \
                      web applications. Passionate about clean code, performance optimization, \
                      and creating delightful user experiences."
                .to_string(),
            image_url: String::new(),
            links: vec![
                Link {
                    name: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/".to_string(),
                },
                Link {
                    name: "GitHub".to_string(),
                    url: "https://github.com/".to_string(),
                },
            ],
        },
        experience: vec![
            Experience {
                role: "Senior Frontend Engineer".to_string(),
                company: "Tech Solutions Inc.".to_string(),
                period: "Jan 2020 - Present".to_string(),
                location: "San Francisco, CA".to_string(),
                description: vec![
                    "Lead the development of a new client-facing dashboard, resulting in a 30% \
                     increase in user engagement."
                        .to_string(),
                    "Mentor junior developers and conduct code reviews to maintain high code \
                     quality standards."
                        .to_string(),
                ],
            },
            Experience {
                role: "Frontend Developer".to_string(),
                company: "Web Innovators".to_string(),
                period: "Jun 2016 - Dec 2019".to_string(),
                location: "Austin, TX".to_string(),
                description: vec![
                    "Developed and maintained responsive websites for various clients."
                        .to_string(),
                    "Implemented A/B tests to optimize user conversion rates.".to_string(),
                ],
            },
        ],
        education: vec![Education {
            degree: "B.S. in Computer Science".to_string(),
            institution: "University of Technology".to_string(),
            period: "Sep 2012 - May 2016".to_string(),
            details: Some("Graduated with Honors, GPA: 3.8/4.0".to_string()),
        }],
        skills: vec![
            "JavaScript (ES6+)".to_string(),
            "TypeScript".to_string(),
            "React".to_string(),
            "HTML5 & CSS3".to_string(),
            "Git".to_string(),
            "CI/CD".to_string(),
            "Agile Methodologies".to_string(),
        ],
        projects: vec![Project {
            name: "Portfolio Builder".to_string(),
            description: "An AI-powered application that generates a professional portfolio \
                          from a resume PDF."
                .to_string(),
            technologies: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Tailwind CSS".to_string(),
            ],
            features: vec![
                "AI-Powered Resume Parsing".to_string(),
                "Dynamic Data Management".to_string(),
            ],
            image_url: String::new(),
            link: "https://github.com/example/portfolio-builder".to_string(),
        }],
    }
}
