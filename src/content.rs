use crate::locale::LocaleCode;

/// A piece of text in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub es: &'static str,
}

impl Localized {
    pub fn get(&self, locale: LocaleCode) -> &'static str {
        match locale {
            LocaleCode::En => self.en,
            LocaleCode::Es => self.es,
        }
    }
}

pub struct PersonalInfo {
    pub name: &'static str,
    pub title: Localized,
    pub location: Localized,
    pub bio: Localized,
    pub about_me: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
}

pub struct SocialLink {
    pub kind: SocialKind,
    pub url: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
}

impl SkillCategory {
    pub fn all() -> [SkillCategory; 4] {
        [Self::Frontend, Self::Backend, Self::Database, Self::Tools]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Database => "Database",
            Self::Tools => "Tools",
        }
    }
}

pub struct Skill {
    pub name: &'static str,
    pub category: SkillCategory,
    /// Devicon class for the skill's logo.
    pub icon: &'static str,
}

pub struct Experience {
    pub company: &'static str,
    pub website: &'static str,
    pub logo: &'static str,
    pub position: Localized,
    pub period: Localized,
    pub description: Localized,
}

impl Experience {
    /// Description split into its bullet points, markers stripped.
    pub fn bullets(&self, locale: LocaleCode) -> Vec<&'static str> {
        self.description
            .get(locale)
            .lines()
            .map(|l| l.trim_start_matches('•').trim())
            .filter(|l| !l.is_empty())
            .collect()
    }
}

pub const PERSONAL_INFO: PersonalInfo = PersonalInfo {
    name: "Joel Carrasco",
    title: Localized {
        en: "Software Developer",
        es: "Desarrollador de Software",
    },
    location: Localized {
        en: "Panama",
        es: "Panamá",
    },
    bio: Localized {
        en: "Full Stack Developer with 3+ years of experience developing robust web and mobile applications. Focused on end-to-end development using React, C#/.NET, and SQL Server. Passionate about agile methodologies and performance optimization in every project.\n\nSpecialized in creating scalable solutions with modern technologies including React Native, Angular, and TypeScript. Experience with Azure DevOps, automated testing, and API integrations.",
        es: "Desarrollador Full Stack con más de 3 años de experiencia desarrollando aplicaciones web y móviles robustas. Enfocado en desarrollo end-to-end usando React, C#/.NET y SQL Server. Apasionado por las metodologías ágiles y la optimización del rendimiento en cada proyecto.\n\nEspecializado en crear soluciones escalables con tecnologías modernas incluyendo React Native, Angular y TypeScript. Experiencia con Azure DevOps, pruebas automatizadas e integraciones de APIs.",
    },
    about_me: Localized {
        en: "I'm Joel, a Full Stack Developer based in Panama with 3+ years of building software that actually works. My day-to-day goes from crafting web and mobile frontends to optimizing database stored procedures. I've shipped projects for both Android and iOS, built APIs from scratch, and spent a good amount of time mentoring junior developers. I enjoy every part of the process, from the first line of code to watching people use the final product.",
        es: "Soy Joel, Desarrollador Full Stack con sede en Panamá y más de 3 años construyendo software que realmente funciona. Mi día a día va desde crear interfaces web y móviles hasta optimizar procedimientos almacenados. He lanzado proyectos para Android e iOS, creado APIs desde cero y dedicado bastante tiempo a mentorear desarrolladores junior. Disfruto cada parte del proceso, desde la primera línea de código hasta ver a la gente usar el producto final.",
    },
};

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::GitHub,
        url: "https://github.com/Joel-SD",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        url: "https://www.linkedin.com/in/joel-carrasco-cubilla",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "3+",
        label: Localized {
            en: "Years Experience",
            es: "Años de Experiencia",
        },
    },
    Stat {
        value: "15+",
        label: Localized {
            en: "Projects",
            es: "Proyectos",
        },
    },
    Stat {
        value: "∞",
        label: Localized {
            en: "Coffee Cups",
            es: "Tazas de Café",
        },
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React", category: SkillCategory::Frontend, icon: "devicon-react-original" },
    Skill { name: "React Native", category: SkillCategory::Frontend, icon: "devicon-react-original" },
    Skill { name: "Angular", category: SkillCategory::Frontend, icon: "devicon-angularjs-plain" },
    Skill { name: "Next.js", category: SkillCategory::Frontend, icon: "devicon-nextjs-plain" },
    Skill { name: "Redux", category: SkillCategory::Frontend, icon: "devicon-redux-original" },
    Skill { name: "JavaScript", category: SkillCategory::Frontend, icon: "devicon-javascript-plain" },
    Skill { name: "TypeScript", category: SkillCategory::Frontend, icon: "devicon-typescript-plain" },
    Skill { name: "Tailwind", category: SkillCategory::Frontend, icon: "devicon-tailwindcss-plain" },
    Skill { name: "Sass", category: SkillCategory::Frontend, icon: "devicon-sass-original" },
    Skill { name: "Node.js", category: SkillCategory::Backend, icon: "devicon-nodejs-plain" },
    Skill { name: "C#", category: SkillCategory::Backend, icon: "devicon-csharp-plain" },
    Skill { name: "Java", category: SkillCategory::Backend, icon: "devicon-java-plain" },
    Skill { name: "SQL Server", category: SkillCategory::Database, icon: "devicon-microsoftsqlserver-plain" },
    Skill { name: "Git", category: SkillCategory::Tools, icon: "devicon-git-plain" },
    Skill { name: "Azure", category: SkillCategory::Tools, icon: "devicon-azure-plain" },
    Skill { name: "Figma", category: SkillCategory::Tools, icon: "devicon-figma-plain" },
    Skill { name: "Postman", category: SkillCategory::Tools, icon: "devicon-postman-plain" },
    Skill { name: "Testing", category: SkillCategory::Tools, icon: "devicon-jest-plain" },
];

pub fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.category == category)
}

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Hypernova Labs",
        website: "https://www.hypernovalabs.com/",
        logo: "/assets/companies/hypernova_labs_logo.jpg",
        position: Localized {
            en: "Full Stack Developer",
            es: "Desarrollador Full Stack",
        },
        period: Localized {
            en: "April 2024 - Present",
            es: "Abril 2024 - Presente",
        },
        description: Localized {
            en: "• Develop end-to-end features for web and mobile applications with React, React Native, and Angular using TypeScript.\n• Improved stored procedures reducing query response times.\n• Implementation of APIs and business logic in C# .NET with SQL Server.\n• Unit and integration testing with SonarQube, NUnit, xUnit and Jest.\n• Pipeline configuration in Azure DevOps (CI/CD, builds, releases, artifacts).\n• Participation in projects under Agile methodologies.",
            es: "• Desarrollo de funcionalidades end-to-end para aplicaciones web y móviles con React, React Native y Angular usando TypeScript.\n• Mejoré procedimientos almacenados reduciendo tiempos de respuesta de consultas.\n• Implementación de APIs y lógica de negocio en C# .NET con SQL Server.\n• Pruebas unitarias e integración con SonarQube, NUnit, xUnit y Jest.\n• Configuración de pipelines en Azure DevOps (CI/CD, builds, releases, artifacts).\n• Participación en proyectos bajo metodologías Agile.",
        },
    },
    Experience {
        company: "Banco General",
        website: "https://www.bgeneral.com/",
        logo: "/assets/companies/banco_general_logo.png",
        position: Localized {
            en: "Software Developer",
            es: "Desarrollador de Software",
        },
        period: Localized {
            en: "January 2024 - April 2024",
            es: "Enero 2024 - Abril 2024",
        },
        description: Localized {
            en: "• Module development with Java, Angular, and TypeScript.\n• Integration of external third-party APIs.\n• Unit test automation with Java and testing frameworks.\n• Work in hybrid environments with Agile.",
            es: "• Desarrollo de módulos con Java, Angular y TypeScript.\n• Integración de APIs externas de terceros.\n• Automatización de pruebas unitarias con Java y frameworks de testing.\n• Trabajo en entornos híbridos con Agile.",
        },
    },
    Experience {
        company: "RednBlue",
        website: "https://rednbluepty.com/en/",
        logo: "/assets/companies/rednblue_logo.jpg",
        position: Localized {
            en: "Software Developer",
            es: "Desarrollador de Software",
        },
        period: Localized {
            en: "June 2022 - January 2024",
            es: "Junio 2022 - Enero 2024",
        },
        description: Localized {
            en: "• Developed modules and features in React and React Native for Android and iOS.\n• Implementation of dark mode and multi-language in web portal and mobile app.\n• Integration of Google Analytics, deep linking, and third-party APIs.\n• Creation of animations and interactive interfaces with React Native Reanimated.",
            es: "• Desarrollé módulos y funcionalidades en React y React Native para Android e iOS.\n• Implementación de modo oscuro y multi-idioma en portal web y app móvil.\n• Integración de Google Analytics, deep linking y APIs de terceros.\n• Creación de animaciones e interfaces interactivas con React Native Reanimated.",
        },
    },
];

pub const CONTACT_EMAIL: &str = "joelcarrasco.sd@gmail.com";
pub const CONTACT_PHONE: &str = "+507 62575381";
pub const CONTACT_LOCATION: Localized = Localized {
    en: "Panama City, Panama",
    es: "Ciudad de Panamá, Panamá",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactMethod {
    Email,
    Phone,
    WhatsApp,
    LinkedIn,
    GitHub,
}

impl ContactMethod {
    pub fn all() -> [ContactMethod; 5] {
        [
            Self::Email,
            Self::Phone,
            Self::WhatsApp,
            Self::LinkedIn,
            Self::GitHub,
        ]
    }

    /// Text shown next to the method's icon.
    pub fn value(&self) -> &'static str {
        match self {
            Self::Email => CONTACT_EMAIL,
            Self::Phone | Self::WhatsApp => CONTACT_PHONE,
            Self::LinkedIn => PERSONAL_INFO.name,
            Self::GitHub => "Joel-SD",
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Email => format!("mailto:{CONTACT_EMAIL}"),
            Self::Phone => format!("tel:{CONTACT_PHONE}"),
            Self::WhatsApp => {
                let digits = CONTACT_PHONE
                    .chars()
                    .filter(char::is_ascii_digit)
                    .collect::<String>();
                format!("https://wa.me/{digits}")
            }
            Self::LinkedIn => social_url(SocialKind::LinkedIn).to_string(),
            Self::GitHub => social_url(SocialKind::GitHub).to_string(),
        }
    }

    /// External links open in a new tab.
    pub fn is_external(&self) -> bool {
        matches!(self, Self::WhatsApp | Self::LinkedIn | Self::GitHub)
    }
}

fn social_url(kind: SocialKind) -> &'static str {
    SOCIAL_LINKS
        .iter()
        .find(|l| l.kind == kind)
        .map(|l| l.url)
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeAsset {
    pub file_name: &'static str,
    pub href: String,
}

const RESUME_FILE: Localized = Localized {
    en: "Joel_Carrasco_Resume.pdf",
    es: "Joel_Carrasco_CV.pdf",
};

pub fn resume_asset(locale: LocaleCode) -> ResumeAsset {
    let file_name = RESUME_FILE.get(locale);
    ResumeAsset {
        file_name,
        href: format!("/assets/documents/{file_name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_selected_by_locale() {
        assert_eq!(
            resume_asset(LocaleCode::En),
            ResumeAsset {
                file_name: "Joel_Carrasco_Resume.pdf",
                href: "/assets/documents/Joel_Carrasco_Resume.pdf".to_string(),
            }
        );
        assert_eq!(resume_asset(LocaleCode::Es).file_name, "Joel_Carrasco_CV.pdf");
    }

    #[test]
    fn test_whatsapp_keeps_digits_only() {
        assert_eq!(ContactMethod::WhatsApp.href(), "https://wa.me/50762575381");
        assert_eq!(ContactMethod::Phone.href(), "tel:+507 62575381");
        assert!(ContactMethod::GitHub.href().starts_with("https://github.com/"));
        assert!(!ContactMethod::Email.is_external());
    }

    #[test]
    fn test_bullets() {
        let bullets = EXPERIENCE[1].bullets(LocaleCode::En);
        assert_eq!(bullets.len(), 4);
        assert_eq!(bullets[0], "Module development with Java, Angular, and TypeScript.");
        assert!(EXPERIENCE
            .iter()
            .all(|e| e.bullets(LocaleCode::En).len() == e.bullets(LocaleCode::Es).len()));
    }

    #[test]
    fn test_every_skill_has_a_category_group() {
        let grouped: usize = SkillCategory::all().iter().map(|c| skills_in(*c).count()).sum();
        assert_eq!(grouped, SKILLS.len());
    }
}
