use crate::locale::LocaleCode;

/// Every user-facing string of the site for one language.
#[derive(Debug, Clone)]
pub struct UiStrings {
    // ==================== Header ====================
    pub nav_about: &'static str,
    pub nav_skills: &'static str,
    pub nav_experience: &'static str,
    pub nav_about_me: &'static str,
    pub nav_contact: &'static str,
    pub nav_resume: &'static str,
    pub menu_toggle: &'static str,

    // ==================== Language switcher ====================
    pub switch_to: &'static str,
    pub language_english: &'static str,
    pub language_spanish: &'static str,

    // ==================== Hero / sections ====================
    pub hero_greeting: &'static str,
    pub hero_location: &'static str,
    pub section_about_me: &'static str,
    pub section_skills: &'static str,
    pub skills_description: &'static str,
    pub section_experience: &'static str,
    pub visit_website: &'static str,

    // ==================== Contact ====================
    pub contact_form_title: &'static str,
    pub contact_form_description: &'static str,
    pub email_placeholder: &'static str,
    pub subject_placeholder: &'static str,
    pub message_placeholder: &'static str,
    pub button_send: &'static str,
    pub button_sending: &'static str,
    pub lets_talk: &'static str,
    pub talk_highlight: &'static str,
    pub talk_for: &'static str,
    pub something_special: &'static str,
    pub contact_description: &'static str,
    pub label_email: &'static str,
    pub label_phone: &'static str,
    pub label_whatsapp: &'static str,
    pub label_linkedin: &'static str,
    pub label_github: &'static str,

    // ==================== Validation ====================
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub subject_required: &'static str,
    pub subject_min_length: &'static str,
    pub subject_max_length: &'static str,
    pub message_required: &'static str,
    pub message_min_length: &'static str,
    pub message_max_length: &'static str,

    // ==================== Toasts ====================
    pub toast_sending: &'static str,
    pub toast_email_sent: &'static str,
    pub toast_email_error: &'static str,
    pub toast_network_error: &'static str,
    pub toast_form_invalid: &'static str,
    pub toast_mail_client_opened: &'static str,
    /// Placeholder: {file}
    pub toast_resume_download: &'static str,
    pub toast_open_email: &'static str,
    pub toast_open_phone: &'static str,
    pub toast_open_whatsapp: &'static str,
    pub toast_open_linkedin: &'static str,
    pub toast_open_github: &'static str,

    // ==================== Footer ====================
    pub footer_made_with: &'static str,
    pub footer_built: &'static str,
}

static EN: UiStrings = UiStrings {
    nav_about: "About",
    nav_skills: "Skills",
    nav_experience: "Experience",
    nav_about_me: "About Me",
    nav_contact: "Contact",
    nav_resume: "Resume",
    menu_toggle: "Toggle navigation",

    switch_to: "Switch to",
    language_english: "English",
    language_spanish: "Spanish",

    hero_greeting: "Hi, I'm",
    hero_location: "Based in",
    section_about_me: "About Me",
    section_skills: "My Skills",
    skills_description: "Technologies and tools I work with every day.",
    section_experience: "My Experience",
    visit_website: "Visit website",

    contact_form_title: "Send me a message",
    contact_form_description: "Have a project in mind or just want to say hi? Drop me a line and I'll get back to you.",
    email_placeholder: "Your email",
    subject_placeholder: "Subject",
    message_placeholder: "Your message",
    button_send: "Send message",
    button_sending: "Sending...",
    lets_talk: "Let's",
    talk_highlight: "talk",
    talk_for: "for",
    something_special: "Something special",
    contact_description: "I'm always open to new projects, creative ideas or opportunities to be part of your vision.",
    label_email: "Email",
    label_phone: "Phone",
    label_whatsapp: "WhatsApp",
    label_linkedin: "LinkedIn",
    label_github: "GitHub",

    email_required: "Email is required",
    email_invalid: "Please enter a valid email address",
    subject_required: "Subject is required",
    subject_min_length: "Subject must be at least 3 characters",
    subject_max_length: "Subject must be at most 100 characters",
    message_required: "Message is required",
    message_min_length: "Message must be at least 10 characters",
    message_max_length: "Message must be at most 1000 characters",

    toast_sending: "Sending message...",
    toast_email_sent: "Email sent successfully!",
    toast_email_error: "Failed to send email. Please try again.",
    toast_network_error: "Network error. Please check your connection.",
    toast_form_invalid: "Please fill in all required fields correctly.",
    toast_mail_client_opened: "Email client opened. Please send the email from your email application.",
    toast_resume_download: "Downloading {file}",
    toast_open_email: "Opening your email client...",
    toast_open_phone: "Opening your phone app...",
    toast_open_whatsapp: "Opening WhatsApp...",
    toast_open_linkedin: "Opening LinkedIn profile...",
    toast_open_github: "Opening GitHub profile...",

    footer_made_with: "Made with Rust and Leptos",
    footer_built: "Built",
};

static ES: UiStrings = UiStrings {
    nav_about: "Inicio",
    nav_skills: "Habilidades",
    nav_experience: "Experiencia",
    nav_about_me: "Sobre Mí",
    nav_contact: "Contacto",
    nav_resume: "CV",
    menu_toggle: "Mostrar navegación",

    switch_to: "Cambiar a",
    language_english: "Inglés",
    language_spanish: "Español",

    hero_greeting: "Hola, soy",
    hero_location: "Ubicado en",
    section_about_me: "Sobre Mí",
    section_skills: "Mis Habilidades",
    skills_description: "Tecnologías y herramientas con las que trabajo a diario.",
    section_experience: "Mi Experiencia",
    visit_website: "Visitar sitio web",

    contact_form_title: "Envíame un mensaje",
    contact_form_description: "¿Tienes un proyecto en mente o solo quieres saludar? Escríbeme y te responderé.",
    email_placeholder: "Tu correo",
    subject_placeholder: "Asunto",
    message_placeholder: "Tu mensaje",
    button_send: "Enviar mensaje",
    button_sending: "Enviando...",
    lets_talk: "Hablemos",
    talk_highlight: "de",
    talk_for: "algo",
    something_special: "Algo especial",
    contact_description: "Siempre estoy abierto a nuevos proyectos, ideas creativas u oportunidades de formar parte de tu visión.",
    label_email: "Correo",
    label_phone: "Teléfono",
    label_whatsapp: "WhatsApp",
    label_linkedin: "LinkedIn",
    label_github: "GitHub",

    email_required: "El correo es obligatorio",
    email_invalid: "Ingresa un correo válido",
    subject_required: "El asunto es obligatorio",
    subject_min_length: "El asunto debe tener al menos 3 caracteres",
    subject_max_length: "El asunto debe tener como máximo 100 caracteres",
    message_required: "El mensaje es obligatorio",
    message_min_length: "El mensaje debe tener al menos 10 caracteres",
    message_max_length: "El mensaje debe tener como máximo 1000 caracteres",

    toast_sending: "Enviando mensaje...",
    toast_email_sent: "¡Correo enviado con éxito!",
    toast_email_error: "No se pudo enviar el correo. Inténtalo de nuevo.",
    toast_network_error: "Error de red. Revisa tu conexión.",
    toast_form_invalid: "Completa correctamente todos los campos obligatorios.",
    toast_mail_client_opened: "Se abrió tu cliente de correo. Envía el mensaje desde tu aplicación de correo.",
    toast_resume_download: "Descargando {file}",
    toast_open_email: "Abriendo tu cliente de correo...",
    toast_open_phone: "Abriendo tu aplicación de teléfono...",
    toast_open_whatsapp: "Abriendo WhatsApp...",
    toast_open_linkedin: "Abriendo perfil de LinkedIn...",
    toast_open_github: "Abriendo perfil de GitHub...",

    footer_made_with: "Hecho con Rust y Leptos",
    footer_built: "Compilado",
};

pub fn strings(locale: LocaleCode) -> &'static UiStrings {
    match locale {
        LocaleCode::En => &EN,
        LocaleCode::Es => &ES,
    }
}

impl UiStrings {
    pub fn resume_download(&self, file: &str) -> String {
        self.toast_resume_download.replace("{file}", file)
    }

    /// Tooltip for the language switcher when `current` is active.
    pub fn switch_language_tooltip(&self, current: LocaleCode) -> String {
        let target = match current.other() {
            LocaleCode::En => self.language_english,
            LocaleCode::Es => self.language_spanish,
        };
        format!("{} {}", self.switch_to, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_differ_per_locale() {
        let en = strings(LocaleCode::En);
        let es = strings(LocaleCode::Es);
        assert_ne!(en.toast_email_sent, es.toast_email_sent);
        assert_ne!(en.email_required, es.email_required);
    }

    #[test]
    fn test_resume_download_placeholder() {
        let msg = strings(LocaleCode::Es).resume_download("Joel_Carrasco_CV.pdf");
        assert_eq!(msg, "Descargando Joel_Carrasco_CV.pdf");
    }

    #[test]
    fn test_switch_tooltip_names_other_language() {
        assert_eq!(
            strings(LocaleCode::En).switch_language_tooltip(LocaleCode::En),
            "Switch to Spanish"
        );
        assert_eq!(
            strings(LocaleCode::Es).switch_language_tooltip(LocaleCode::Es),
            "Cambiar a Inglés"
        );
    }
}
