use urlencoding::encode;

use crate::content::Contact;
use crate::scroll::DomError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl ContactRequest {
    pub fn subject(&self, text: &Contact) -> String {
        format!("{}: {}", text.mail_subject, self.service.trim())
    }

    /// One labelled line per field, message last. Company is optional.
    pub fn body(&self, text: &Contact) -> String {
        let labels = &text.labels;
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let mut lines = vec![
            format!("{}: {}", labels.first_name, self.first_name.trim()),
            format!("{}: {}", labels.last_name, self.last_name.trim()),
        ];
        if !self.company.trim().is_empty() {
            lines.push(format!("{}: {}", labels.company, self.company.trim()));
        }
        lines.push(format!("{}: {}", labels.service, self.service.trim()));
        lines.push(String::new());
        lines.push(format!("{}:", labels.message));
        lines.push(self.message.trim().to_string());
        lines.push(String::new());
        lines.push(format!("-- {}", name.trim()));
        lines.join("\r\n")
    }

    pub fn mailto_link(&self, to: &str, text: &Contact) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            encode(&self.subject(text)),
            encode(&self.body(text))
        )
    }
}

/// Hands the request to the visitor's mail client. Delivery is out of our hands.
pub fn open_mail_client(link: &str) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    window
        .location()
        .set_href(link)
        .map_err(|e| DomError::js("mailto navigation", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{AR, EN};
    use pretty_assertions::assert_eq;

    fn request() -> ContactRequest {
        ContactRequest {
            first_name: "John".into(),
            last_name: "Doe".into(),
            company: "Doe & Sons LLC".into(),
            service: "Tax & VAT Consultancy".into(),
            message: "Need a quote?\nThanks".into(),
        }
    }

    #[test]
    fn subject_carries_the_service() {
        assert_eq!(request().subject(&EN.contact), "Callback request: Tax & VAT Consultancy");
    }

    #[test]
    fn body_lists_fields_in_order() {
        let body = request().body(&EN.contact);
        let lines: Vec<_> = body.split("\r\n").collect();
        assert_eq!(lines[0], "First Name: John");
        assert_eq!(lines[1], "Last Name: Doe");
        assert_eq!(lines[2], "Company Name: Doe & Sons LLC");
        assert_eq!(lines[3], "Service Required: Tax & VAT Consultancy");
        assert!(body.ends_with("-- John Doe"));
    }

    #[test]
    fn empty_company_is_left_out() {
        let req = ContactRequest { company: "  ".into(), ..request() };
        assert!(!req.body(&EN.contact).contains("Company Name"));
    }

    #[test]
    fn link_is_percent_encoded() {
        let link = request().mailto_link("info@salemballama.com", &EN.contact);
        assert!(link.starts_with("mailto:info@salemballama.com?subject=Callback%20request%3A%20Tax%20%26%20VAT"));
        let query = link.split_once('?').unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert_eq!(query.matches('&').count(), 1, "only the subject/body separator may be a raw '&'");
        assert!(query.contains("%0D%0A"));
        assert!(query.contains("%3F"));
    }

    #[test]
    fn arabic_text_is_encoded() {
        let req = ContactRequest { service: AR.contact.options[0].into(), ..request() };
        let link = req.mailto_link("info@salemballama.com", &AR.contact);
        assert!(link.is_ascii());
        let subject = link.split("subject=").nth(1).unwrap().split('&').next().unwrap();
        assert_eq!(urlencoding::decode(subject).unwrap(), "طلب اتصال: التدقيق والضمان");
    }
}
