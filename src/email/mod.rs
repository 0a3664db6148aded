use crate::models::contact::ContactMessage;

/// Where accepted contact submissions go. Returns a reference id the visitor
/// never sees but operators can grep for.
pub trait ContactSink: Send + Sync {
    fn deliver(&self, message: &ContactMessage) -> Result<String, String>;
}

/// Default sink: no mail backend, the submission is only logged.
pub struct LogSink {
    site_name: String,
}

impl LogSink {
    pub fn new(site_name: &str) -> Self {
        LogSink {
            site_name: site_name.to_string(),
        }
    }
}

impl ContactSink for LogSink {
    fn deliver(&self, message: &ContactMessage) -> Result<String, String> {
        let reference = uuid::Uuid::new_v4().to_string();
        log::info!(
            "[contact] {} ref={} from={} <{}>\n{}",
            self.site_name,
            reference,
            message.name,
            message.email,
            notification_body(message)
        );
        Ok(reference)
    }
}

/// Plain-text body an integrator would mail to the site owner.
pub fn notification_body(message: &ContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\n\n{}\n",
        message.name, message.email, message.message
    )
}
