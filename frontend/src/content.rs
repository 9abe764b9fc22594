//! Typed content schema shared by both locales.
//!
//! Every user-facing string lives in one of the two [`Content`] instances,
//! [`EN`] and [`AR`]. They must have the same shape: same list lengths, same
//! team member ids in the same order. The tests at the bottom of this file
//! enforce that.

use serde::Serialize;

mod ar;
mod en;

pub use ar::AR;
pub use en::EN;

#[derive(Debug, Serialize)]
pub struct Content {
    pub brand: Brand,
    pub nav: Nav,
    pub hero: Hero,
    pub stats: &'static [Stat],
    pub services: Services,
    pub about: About,
    pub team: Team,
    pub tax: TaxText,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Serialize)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Nav {
    pub home: &'static str,
    pub services: &'static str,
    pub about: &'static str,
    pub expertise: &'static str,
    pub contact: &'static str,
    pub cta: &'static str,
    pub quote: &'static str,
    pub menu: &'static str,
}

impl Nav {
    /// Label for one of the section anchors listed in the navbar.
    pub fn label(&self, anchor: &str) -> &'static str {
        match anchor {
            "home" => self.home,
            "services" => self.services,
            "about" => self.about,
            "expertise" => self.expertise,
            "contact" => self.contact,
            _ => "",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Hero {
    pub established: &'static str,
    pub title1: &'static str,
    pub title1_highlight: &'static str,
    pub title2: &'static str,
    pub title2_highlight: &'static str,
    pub desc: &'static str,
    pub btn_service: &'static str,
    pub btn_about: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Services {
    pub header: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub items: &'static [ServiceItem],
    pub learn_more: &'static str,
    pub estimate_tax: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ServiceItem {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Serialize)]
pub struct About {
    pub title: &'static str,
    pub intro: &'static str,
    pub desc: &'static str,
    pub quote1: &'static str,
    pub quote2: &'static str,
    pub chairman_name: &'static str,
    pub role: &'static str,
    pub expertise_title: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct Team {
    pub header: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub view_profile: &'static str,
    pub back: &'static str,
    pub expertise_title: &'static str,
    pub members: &'static [TeamMember],
}

impl Team {
    pub fn member(&self, id: &str) -> Option<&'static TeamMember> {
        self.members.iter().find(|m| m.id == id)
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
    pub expertise: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct TaxText {
    pub header: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub rule_exempt: &'static str,
    pub rule_taxable: &'static str,
    pub input_label: &'static str,
    pub placeholder: &'static str,
    pub calculate: &'static str,
    pub result_title: &'static str,
    pub total_profit: &'static str,
    pub exempt_amount: &'static str,
    pub taxable_amount: &'static str,
    pub tax_due: &'static str,
    pub empty_hint: &'static str,
    pub disclaimer: &'static str,
    pub back: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Contact {
    pub title: &'static str,
    pub desc: &'static str,
    pub labels: ContactLabels,
    pub placeholders: ContactPlaceholders,
    pub options: &'static [&'static str],
    pub mail_subject: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ContactLabels {
    pub head_office: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub form_title: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub company: &'static str,
    pub service: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ContactPlaceholders {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub company: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Footer {
    pub rights: &'static str,
    pub tagline: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    // Fields whose values are identifiers or asset paths, not translations.
    const LOCALE_INVARIANT: &[&str] = &["id", "image"];

    fn assert_same_shape(en: &Value, ar: &Value, path: &str) {
        match (en, ar) {
            (Value::Object(a), Value::Object(b)) => {
                let a_keys: Vec<_> = a.keys().collect();
                let b_keys: Vec<_> = b.keys().collect();
                assert_eq!(a_keys, b_keys, "keys differ at {path}");
                for (key, value) in a {
                    let child = format!("{path}.{key}");
                    if LOCALE_INVARIANT.contains(&key.as_str()) {
                        assert_eq!(value, &b[key], "{child} must match across locales");
                    } else {
                        assert_same_shape(value, &b[key], &child);
                    }
                }
            }
            (Value::Array(a), Value::Array(b)) => {
                assert_eq!(a.len(), b.len(), "list length differs at {path}");
                for (i, (x, y)) in a.iter().zip(b).enumerate() {
                    assert_same_shape(x, y, &format!("{path}[{i}]"));
                }
            }
            (Value::String(a), Value::String(b)) => {
                assert!(!a.trim().is_empty(), "empty english text at {path}");
                assert!(!b.trim().is_empty(), "empty arabic text at {path}");
            }
            _ => panic!("type mismatch at {path}: {en} vs {ar}"),
        }
    }

    #[test]
    fn locales_have_identical_structure() {
        let en = serde_json::to_value(&EN).expect("serialize en");
        let ar = serde_json::to_value(&AR).expect("serialize ar");
        assert_same_shape(&en, &ar, "content");
    }

    #[test]
    fn team_ids_are_unique() {
        let mut ids: Vec<_> = EN.team.members.iter().map(|m| m.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), EN.team.members.len());
    }

    #[test]
    fn member_lookup_by_id() {
        let first = &EN.team.members[0];
        assert_eq!(EN.team.member(first.id), Some(first));
        assert_eq!(AR.team.member(first.id).map(|m| m.image), Some(first.image));
        assert_eq!(EN.team.member("nobody"), None);
    }

    #[test]
    fn nav_labels_cover_every_section() {
        for anchor in ["home", "services", "about", "expertise", "contact"] {
            assert!(!EN.nav.label(anchor).is_empty(), "{anchor}");
            assert!(!AR.nav.label(anchor).is_empty(), "{anchor}");
        }
        assert_eq!(EN.nav.label("team"), "");
    }

    #[test]
    fn six_services_and_five_contact_options() {
        assert_eq!(EN.services.items.len(), 6);
        assert_eq!(EN.contact.options.len(), 5);
    }
}
