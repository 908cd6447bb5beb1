use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A bookable half-hour slot from the fixed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: String,
    pub title: String,
    pub emoji: String,
    pub description: String,
}

impl TimeSlot {
    fn new(time: &str, title: &str, emoji: &str, description: &str) -> Self {
        Self {
            time: time.to_string(),
            title: title.to_string(),
            emoji: emoji.to_string(),
            description: description.to_string(),
        }
    }
}

/// The five slots every weekday offers.
pub fn default_slots() -> Vec<TimeSlot> {
    vec![
        TimeSlot::new("09:00", "Morgonmöte", "🌅", "Perfekt för att starta dagen med AI-inspiration"),
        TimeSlot::new("10:30", "Förmiddagssamtal", "☕", "Kaffe och AI - en perfekt kombination"),
        TimeSlot::new("13:00", "Lunchmöte", "🍽️", "Diskutera AI över lunch"),
        TimeSlot::new("14:30", "Eftermiddagssamtal", "🌞", "Mitt på dagen när hjärnan är skarp"),
        TimeSlot::new("16:00", "Kvällsmöte", "🌆", "Avsluta arbetsdagen med framtidstankar"),
    ]
}

/// A consultation focus area offered in the modal's service step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOption {
    pub title: String,
    pub description: String,
    pub benefit: String,
}

impl ServiceOption {
    fn new(title: &str, description: &str, benefit: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            benefit: benefit.to_string(),
        }
    }
}

pub fn default_services() -> Vec<ServiceOption> {
    vec![
        ServiceOption::new(
            "🤖 Intelligent Kundservice",
            "Automatisera kundinteraktioner med AI-chatbots",
            "Spara 40+ timmar/vecka",
        ),
        ServiceOption::new(
            "📊 Smart Dataanalys",
            "Förvandla data till actionable insights",
            "Öka beslutskvalitet med 200%",
        ),
        ServiceOption::new(
            "⚡ Processautomatisering",
            "Automatisera repetitiva uppgifter",
            "Frigör tid för strategiskt arbete",
        ),
        ServiceOption::new(
            "💡 Skräddarsydd AI-lösning",
            "Helt anpassad efter dina behov",
            "Maximal ROI för ditt företag",
        ),
    ]
}

/// The contact fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Company,
    Role,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::Company,
        FieldKind::Role,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Name => "Namn",
            FieldKind::Email => "E-post",
            FieldKind::Phone => "Telefon",
            FieldKind::Company => "Företag",
            FieldKind::Role => "Befattning",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldKind::Name => "Ditt fullständiga namn",
            FieldKind::Email => "Din e-postadress för kalenderinbjudan",
            FieldKind::Phone => "Ditt telefonnummer (valfritt)",
            FieldKind::Company => "Ditt företags namn",
            FieldKind::Role => "Din roll i företaget",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, FieldKind::Name | FieldKind::Email | FieldKind::Company)
    }
}

/// One entry field. The value starts out showing the placeholder, exactly
/// like the source form; a field still equal to its placeholder counts as
/// empty for validation.
#[derive(Debug, Clone)]
pub struct ContactField {
    pub kind: FieldKind,
    pub value: String,
}

impl ContactField {
    fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            value: kind.placeholder().to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value == self.kind.placeholder()
    }

    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty() && !self.is_placeholder()
    }

    /// The first real keystroke clears the placeholder.
    pub fn push_char(&mut self, c: char) {
        if self.is_placeholder() {
            self.value.clear();
        }
        self.value.push(c);
    }

    pub fn pop_char(&mut self) {
        if self.is_placeholder() {
            self.value.clear();
        } else {
            self.value.pop();
        }
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<ContactField>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: FieldKind::ALL.iter().map(|k| ContactField::new(*k)).collect(),
        }
    }

    pub fn fields(&self) -> &[ContactField] {
        &self.fields
    }

    pub fn field(&self, kind: FieldKind) -> &ContactField {
        self.fields
            .iter()
            .find(|f| f.kind == kind)
            .expect("all field kinds exist")
    }

    pub fn field_mut(&mut self, kind: FieldKind) -> &mut ContactField {
        self.fields
            .iter_mut()
            .find(|f| f.kind == kind)
            .expect("all field kinds exist")
    }

    pub fn field_at(&self, index: usize) -> Option<&ContactField> {
        self.fields.get(index)
    }

    pub fn field_at_mut(&mut self, index: usize) -> Option<&mut ContactField> {
        self.fields.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First required field that is missing, in form order.
    pub fn first_missing(&self) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|f| f.kind.is_required() && !f.is_filled())
            .map(|f| f.kind)
    }

    pub fn value(&self, kind: FieldKind) -> &str {
        &self.field(kind).value
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Demo data the auto-pilot types into the form, one field per beat.
pub fn demo_profile() -> [(FieldKind, &'static str); 5] {
    [
        (FieldKind::Name, "Anna Andersson"),
        (FieldKind::Email, "anna.andersson@foretag.se"),
        (FieldKind::Phone, "070-123 45 67"),
        (FieldKind::Company, "Innovativa Lösningar AB"),
        (FieldKind::Role, "VD"),
    ]
}

/// Everything a booking pass accumulates. Created empty when the modal
/// opens and discarded when it closes; nothing survives the modal.
#[derive(Debug, Clone, Default)]
pub struct BookingSelection {
    pub date: Option<NaiveDate>,
    pub slot: Option<usize>,
    pub service: Option<usize>,
    pub form: ContactForm,
}

impl BookingSelection {
    pub fn new() -> Self {
        Self {
            date: None,
            slot: None,
            service: None,
            form: ContactForm::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slots_include_half_past_ten() {
        let slots = default_slots();
        assert_eq!(slots.len(), 5);
        assert!(slots.iter().any(|s| s.time == "10:30"));
    }

    #[test]
    fn test_placeholder_counts_as_empty() {
        let form = ContactForm::new();
        let name = form.field(FieldKind::Name);
        assert!(name.is_placeholder());
        assert!(!name.is_filled());
    }

    #[test]
    fn test_first_keystroke_clears_placeholder() {
        let mut form = ContactForm::new();
        let field = form.field_mut(FieldKind::Name);
        field.push_char('A');
        assert_eq!(field.value, "A");
        assert!(field.is_filled());
    }

    #[test]
    fn test_backspace_on_placeholder_clears_it() {
        let mut form = ContactForm::new();
        let field = form.field_mut(FieldKind::Email);
        field.pop_char();
        assert_eq!(field.value, "");
        assert!(!field.is_filled());
    }

    #[test]
    fn test_first_missing_respects_form_order() {
        let mut form = ContactForm::new();
        assert_eq!(form.first_missing(), Some(FieldKind::Name));

        form.field_mut(FieldKind::Name).set("Anna Andersson");
        assert_eq!(form.first_missing(), Some(FieldKind::Email));

        form.field_mut(FieldKind::Email).set("anna@foretag.se");
        form.field_mut(FieldKind::Company).set("Innovativa Lösningar AB");
        assert_eq!(form.first_missing(), None);
    }

    #[test]
    fn test_phone_and_role_are_optional() {
        assert!(!FieldKind::Phone.is_required());
        assert!(!FieldKind::Role.is_required());
        assert!(FieldKind::Name.is_required());
    }

    #[test]
    fn test_whitespace_only_is_not_filled() {
        let mut form = ContactForm::new();
        form.field_mut(FieldKind::Company).set("   ");
        assert!(!form.field(FieldKind::Company).is_filled());
    }
}
