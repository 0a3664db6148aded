use rocket::form::FromFormField;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display locale. Only the two shipped locales are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, FromFormField)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[field(value = "en")]
    En,
    #[field(value = "tr")]
    Tr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Tr];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }

    /// Name of the language in that language, for the header menu.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Tr => "Türkçe",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Look up the display string for `key`. Never fails: an unknown key
/// comes back verbatim so it shows up on the page instead of breaking it.
pub fn get_text<'a>(key: &'a str, language: Language) -> &'a str {
    let table = match language {
        Language::En => EN,
        Language::Tr => TR,
    };
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

const EN: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.projects", "Projects"),
    ("nav.blog", "Blog"),
    ("nav.contact", "Contact"),
    ("nav.toggleTheme", "Toggle theme"),
    ("nav.toggleMenu", "Toggle menu"),
    ("nav.language", "Language"),
    // Home page
    ("home.title", "Creative Developer & Designer"),
    ("home.subtitle", "I build beautiful digital experiences that delight users"),
    ("home.cta", "View My Work"),
    ("home.contact", "Get in Touch"),
    ("home.skillsSubtitle", "I work with various technologies to create amazing digital experiences"),
    ("home.projectsSubtitle", "Check out some of my recent work"),
    ("home.ctaTitle", "Ready to start your next project?"),
    ("home.ctaText", "I'm currently available for freelance work. Let's build something amazing together!"),
    // About page
    ("about.title", "About Me"),
    ("about.subtitle", "My journey as a developer"),
    ("about.intro", "I'm a full-stack developer and designer with a passion for creating elegant, efficient solutions to complex problems."),
    ("about.skills", "My Skills"),
    ("about.tools", "Tools & Technologies"),
    ("about.journey", "My Journey"),
    ("about.journeySubtitle", "A timeline of my professional experience"),
    ("about.skillsSubtitle", "My areas of expertise and proficiency"),
    ("about.whoIAm", "Who I Am"),
    ("about.bio1", "I'm a passionate full-stack developer with over 6 years of experience in creating web and mobile applications. I specialize in React, Node.js, and modern JavaScript frameworks."),
    ("about.bio2", "My approach combines technical expertise with an eye for design, ensuring that the products I build are not only functional but also aesthetically pleasing and user-friendly."),
    ("about.bio3", "I'm constantly learning and staying up-to-date with the latest technologies and best practices in web development. I believe in writing clean, maintainable code and following principles like DRY and SOLID."),
    ("about.toolsSubtitle", "The tools and technologies I use daily"),
    // Projects page
    ("projects.title", "My Projects"),
    ("projects.subtitle", "Selected works"),
    ("projects.viewAll", "View All Projects"),
    ("projects.viewDetails", "View Details"),
    ("projects.all", "All Projects"),
    ("projects.emptyTitle", "No projects found"),
    ("projects.emptyText", "No projects match the selected filter. Try another one!"),
    ("projects.description", "Description"),
    ("projects.challenge", "Challenge"),
    ("projects.solution", "Solution"),
    ("projects.impact", "Impact"),
    ("projects.liveDemo", "Live Demo"),
    ("projects.sourceCode", "Source Code"),
    ("projects.close", "Close"),
    // Blog page
    ("blog.title", "Blog"),
    ("blog.subtitle", "Thoughts and tutorials"),
    ("blog.readMore", "Read More"),
    ("blog.read", "Read"),
    ("blog.search", "Search posts..."),
    ("blog.all", "All"),
    ("blog.emptyTitle", "No posts found"),
    ("blog.emptyText", "Try a different search term or category."),
    ("blog.viewAll", "View All Posts"),
    ("blog.back", "Back to Blog"),
    ("blog.moreIn", "More in"),
    // Contact page
    ("contact.title", "Contact Me"),
    ("contact.subtitle", "Let's work together"),
    ("contact.name", "Name"),
    ("contact.email", "Email"),
    ("contact.message", "Message"),
    ("contact.send", "Send Message"),
    ("contact.success", "Message sent successfully!"),
    ("contact.error", "Error sending message. Please try again."),
    ("contact.successDetail", "I will get back to you soon!"),
    ("contact.getInTouch", "Get in Touch"),
    ("contact.intro", "Have a project in mind or want to discuss a potential collaboration? I'd love to hear from you! Fill out the form or reach out directly through any of these channels."),
    ("contact.phone", "Phone"),
    ("contact.location", "Location"),
    ("contact.connect", "Connect with me"),
    ("contact.sendTitle", "Send a Message"),
    ("contact.mapPlaceholder", "Map placeholder"),
    ("contact.namePlaceholder", "Your name"),
    ("contact.emailPlaceholder", "your.email@example.com"),
    ("contact.messagePlaceholder", "How can I help you? Let me know about your project..."),
    ("contact.nameInvalid", "Name must be at least 2 characters."),
    ("contact.emailInvalid", "Please enter a valid email address."),
    ("contact.messageInvalid", "Message must be at least 10 characters."),
    ("contact.rateLimited", "Too many messages. Please wait a while before trying again."),
    // Footer
    ("footer.blurb", "I'm a full-stack developer and designer focused on creating clean and user-friendly experiences."),
    ("footer.links", "Links"),
    ("footer.contact", "Contact"),
    ("footer.rights", "All rights reserved."),
    ("footer.privacy", "Privacy Policy"),
    ("footer.terms", "Terms of Service"),
    // Not found
    ("notFound.title", "Page Not Found"),
    ("notFound.text", "The page you're looking for doesn't exist or has been moved."),
    ("notFound.back", "Back to Home"),
];

const TR: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Ana Sayfa"),
    ("nav.about", "Hakkımda"),
    ("nav.projects", "Projeler"),
    ("nav.blog", "Blog"),
    ("nav.contact", "İletişim"),
    ("nav.toggleTheme", "Temayı değiştir"),
    ("nav.toggleMenu", "Menüyü aç/kapat"),
    ("nav.language", "Dil"),
    // Home page
    ("home.title", "Yaratıcı Geliştirici & Tasarımcı"),
    ("home.subtitle", "Kullanıcıları mutlu eden güzel dijital deneyimler geliştiriyorum"),
    ("home.cta", "Çalışmalarımı Gör"),
    ("home.contact", "İletişime Geç"),
    ("home.skillsSubtitle", "Harika dijital deneyimler yaratmak için çeşitli teknolojilerle çalışıyorum"),
    ("home.projectsSubtitle", "Son çalışmalarımdan bazılarına göz atın"),
    ("home.ctaTitle", "Bir sonraki projenize başlamaya hazır mısınız?"),
    ("home.ctaText", "Şu anda freelance çalışmalar için müsaitim. Birlikte harika bir şeyler inşa edelim!"),
    // About page
    ("about.title", "Hakkımda"),
    ("about.subtitle", "Bir geliştirici olarak yolculuğum"),
    ("about.intro", "Karmaşık sorunlara zarif ve verimli çözümler üretme tutkusuna sahip bir full-stack geliştirici ve tasarımcıyım."),
    ("about.skills", "Yeteneklerim"),
    ("about.tools", "Araçlar & Teknolojiler"),
    ("about.journey", "Yolculuğum"),
    ("about.journeySubtitle", "Profesyonel deneyimimin bir zaman çizelgesi"),
    ("about.skillsSubtitle", "Uzmanlık ve yeterlilik alanlarım"),
    ("about.whoIAm", "Ben Kimim"),
    ("about.bio1", "Web ve mobil uygulamalar oluşturma konusunda 6 yıldan fazla deneyime sahip tutkulu bir full-stack geliştiriciyim. React, Node.js ve modern JavaScript frameworklerinde uzmanım."),
    ("about.bio2", "Yaklaşımım, teknik uzmanlığı tasarım anlayışıyla birleştirerek, oluşturduğum ürünlerin sadece işlevsel değil, aynı zamanda estetik açıdan da hoş ve kullanıcı dostu olmasını sağlar."),
    ("about.bio3", "Sürekli olarak öğreniyor ve web geliştirmedeki en son teknolojiler ve en iyi uygulamalarla güncel kalıyorum. Temiz, bakımı kolay kod yazmaya ve DRY ve SOLID gibi prensipleri takip etmeye inanıyorum."),
    ("about.toolsSubtitle", "Günlük olarak kullandığım araçlar ve teknolojiler"),
    // Projects page
    ("projects.title", "Projelerim"),
    ("projects.subtitle", "Seçilmiş çalışmalar"),
    ("projects.viewAll", "Tüm Projeleri Gör"),
    ("projects.viewDetails", "Detayları Gör"),
    ("projects.all", "Tüm Projeler"),
    ("projects.emptyTitle", "Proje bulunamadı"),
    ("projects.emptyText", "Seçilen filtreyle eşleşen proje yok. Başka bir tane deneyin!"),
    ("projects.description", "Açıklama"),
    ("projects.challenge", "Zorluk"),
    ("projects.solution", "Çözüm"),
    ("projects.impact", "Etki"),
    ("projects.liveDemo", "Canlı Demo"),
    ("projects.sourceCode", "Kaynak Kod"),
    ("projects.close", "Kapat"),
    // Blog page
    ("blog.title", "Blog"),
    ("blog.subtitle", "Düşünceler ve öğreticiler"),
    ("blog.readMore", "Daha Fazla Oku"),
    ("blog.read", "Oku"),
    ("blog.search", "Yazıları ara..."),
    ("blog.all", "Tümü"),
    ("blog.emptyTitle", "Yazı bulunamadı"),
    ("blog.emptyText", "Farklı bir arama terimi veya kategori deneyin."),
    ("blog.viewAll", "Tüm Yazıları Görüntüle"),
    ("blog.back", "Bloga Dön"),
    ("blog.moreIn", "Diğer yazılar:"),
    // Contact page
    ("contact.title", "İletişim"),
    ("contact.subtitle", "Birlikte çalışalım"),
    ("contact.name", "İsim"),
    ("contact.email", "E-posta"),
    ("contact.message", "Mesaj"),
    ("contact.send", "Mesaj Gönder"),
    ("contact.success", "Mesaj başarıyla gönderildi!"),
    ("contact.error", "Mesaj gönderilirken hata oluştu. Lütfen tekrar deneyin."),
    ("contact.successDetail", "En kısa sürede size döneceğim!"),
    ("contact.getInTouch", "İletişime Geçin"),
    ("contact.intro", "Aklınızda bir proje mi var veya potansiyel bir işbirliğini mi görüşmek istiyorsunuz? Sizden haber almak isterim! Formu doldurun veya bu kanallardan herhangi biri aracılığıyla doğrudan iletişime geçin."),
    ("contact.phone", "Telefon"),
    ("contact.location", "Konum"),
    ("contact.connect", "Benimle bağlantı kurun"),
    ("contact.sendTitle", "Mesaj Gönder"),
    ("contact.mapPlaceholder", "Harita yer tutucusu"),
    ("contact.namePlaceholder", "Adınız"),
    ("contact.emailPlaceholder", "email@ornek.com"),
    ("contact.messagePlaceholder", "Nasıl yardımcı olabilirim? Projeniz hakkında bilgi verin..."),
    ("contact.nameInvalid", "İsim en az 2 karakter olmalıdır."),
    ("contact.emailInvalid", "Lütfen geçerli bir e-posta adresi girin."),
    ("contact.messageInvalid", "Mesaj en az 10 karakter olmalıdır."),
    ("contact.rateLimited", "Çok fazla mesaj gönderildi. Lütfen bir süre bekleyip tekrar deneyin."),
    // Footer
    ("footer.blurb", "Temiz ve kullanıcı dostu deneyimler yaratmaya odaklanan bir full-stack geliştirici ve tasarımcıyım."),
    ("footer.links", "Bağlantılar"),
    ("footer.contact", "İletişim"),
    ("footer.rights", "Tüm hakları saklıdır."),
    ("footer.privacy", "Gizlilik Politikası"),
    ("footer.terms", "Kullanım Şartları"),
    // Not found
    ("notFound.title", "Sayfa Bulunamadı"),
    ("notFound.text", "Aradığınız sayfa mevcut değil veya taşındı."),
    ("notFound.back", "Ana Sayfaya Dön"),
];
