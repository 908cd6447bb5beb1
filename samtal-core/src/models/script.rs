use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SamtalError};

/// One step of a conversation script. `OpenBooking` is the sentinel: not a
/// message, but an instruction to the front end to raise the booking modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEntry {
    Bot { text: String },
    User { text: String },
    OpenBooking,
}

impl ScriptEntry {
    pub fn bot(text: impl Into<String>) -> Self {
        ScriptEntry::Bot { text: text.into() }
    }

    pub fn user(text: impl Into<String>) -> Self {
        ScriptEntry::User { text: text.into() }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, ScriptEntry::OpenBooking)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            ScriptEntry::Bot { text } | ScriptEntry::User { text } => Some(text),
            ScriptEntry::OpenBooking => None,
        }
    }
}

/// An immutable, ordered conversation. Replayed verbatim every pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationScript {
    pub name: String,
    pub entries: Vec<ScriptEntry>,
}

impl ConversationScript {
    pub fn new(name: impl Into<String>, entries: Vec<ScriptEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn sentinel_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_sentinel()).count()
    }

    fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(SamtalError::invalid_script(&self.name, "script has no entries"));
        }
        if self.sentinel_count() > 1 {
            return Err(SamtalError::invalid_script(
                &self.name,
                "more than one booking sentinel in a single pass",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct ScriptFile {
    #[serde(rename = "script")]
    scripts: Vec<ConversationScript>,
}

/// The ordered set of scripts the driver cycles through. The cursor is
/// sequential and wraps back to the first script after the last one.
#[derive(Debug, Clone)]
pub struct ScriptLibrary {
    scripts: Vec<ConversationScript>,
    cursor: usize,
}

impl ScriptLibrary {
    pub fn new(scripts: Vec<ConversationScript>) -> Result<Self> {
        if scripts.is_empty() {
            return Err(SamtalError::invalid_script("<library>", "no scripts defined"));
        }
        for script in &scripts {
            script.validate()?;
        }
        Ok(Self { scripts, cursor: 0 })
    }

    /// The built-in scenarios: an enthusiastic startup, an established
    /// company, and a skeptic. Each ends in the booking sentinel.
    pub fn builtin() -> Self {
        Self::new(builtin_scripts()).expect("built-in scripts are valid")
    }

    /// Replace the built-ins with scripts from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| SamtalError::ScriptFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: ScriptFile = toml::from_str(raw)?;
        Self::new(file.scripts)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Index of the script `next()` will hand out, zero-based.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Jump the cursor, used by the launcher's scenario flag.
    pub fn start_at(&mut self, index: usize) {
        self.cursor = index % self.scripts.len();
    }

    /// Hand out the next script and advance, wrapping after the last one.
    pub fn next_script(&mut self) -> (usize, ConversationScript) {
        let index = self.cursor;
        let script = self.scripts[index].clone();
        self.cursor = (self.cursor + 1) % self.scripts.len();
        (index, script)
    }

    pub fn scripts(&self) -> &[ConversationScript] {
        &self.scripts
    }
}

fn builtin_scripts() -> Vec<ConversationScript> {
    use ScriptEntry as E;

    vec![
        ConversationScript::new(
            "startup",
            vec![
                E::bot("🤖 Hej! Välkommen till Svea Studio - Sveriges ledande AI-byrå!"),
                E::bot("Vi hjälper företag att öka produktiviteten med 300% genom intelligenta AI-lösningar! 🚀"),
                E::user("Hej! Det låter fantastiskt. Vi är ett startup som behöver automatisera vår kundservice."),
                E::bot("Perfekt! Startups är våra favoriter! 💡 Vi kan implementera en AI-chatbot som hanterar 80% av era kundförfrågningar automatiskt."),
                E::bot("En av våra startup-kunder minskade sina supportkostnader med 70% på bara 3 veckor! 📊"),
                E::user("Wow! Hur snabbt kan ni implementera något liknande för oss?"),
                E::bot("För startups har vi en speciallösning som kan vara igång på 5 arbetsdagar! ⚡"),
                E::bot("Vill du boka en kostnadsfri 30-minuters demo där jag visar exakt hur det fungerar?"),
                E::user("Ja, absolut! Det låter som precis vad vi behöver."),
                E::bot("Fantastiskt! Jag öppnar vårt bokningssystem så du kan välja en tid som passar. 🎯"),
                E::OpenBooking,
            ],
        ),
        ConversationScript::new(
            "established",
            vec![
                E::bot("🤖 Välkommen till Svea Studio! Vi revolutionerar företag med AI-teknik."),
                E::bot("Sedan 2020 har vi hjälpt över 200 företag att automatisera sina processer! 📈"),
                E::user("Hej! Vi är ett etablerat företag med 50 anställda. Kan AI verkligen hjälpa oss?"),
                E::bot("Absolut! Etablerade företag ser ofta de största fördelarna! 🏢 Ni har redan processer som kan optimeras."),
                E::bot("Ett liknande företag sparade 25 timmar per vecka genom att automatisera sin orderhantering."),
                E::user("Det låter intressant. Vilka andra områden kan ni hjälpa med?"),
                E::bot("Vi specialiserar oss på intelligent dokumenthantering, automatisk dataanalys, prediktivt underhåll och smart personalplanering. 📋"),
                E::bot("Vad säger du om en djupgående konsultation där vi analyserar era specifika behov?"),
                E::user("Ja, det vore värdefullt. När kan vi träffas?"),
                E::bot("Perfekt! Låt mig öppna vårt bokningssystem så du kan välja en tid som passar era scheman. 🗓️"),
                E::OpenBooking,
            ],
        ),
        ConversationScript::new(
            "skeptic",
            vec![
                E::bot("🤖 Hej och välkommen till Svea Studio! Vi gör AI tillgängligt för alla företag."),
                E::bot("Oavsett bransch eller storlek kan vi hjälpa er att dra nytta av AI:s kraft! 💪"),
                E::user("Hej. Jag är lite skeptisk till AI. Är det verkligen värt investeringen?"),
                E::bot("Jag förstår din skepsis helt! 🤔 Många av våra mest nöjda kunder var skeptiska från början."),
                E::bot("Därför erbjuder vi alltid en kostnadsfri analys först. Inga löften - bara konkreta siffror."),
                E::user("Okej, det låter rimligt. Men hur vet jag att ni kan leverera?"),
                E::bot("Bra fråga! Vi har en 100% nöjd-kund-garanti. 🛡️ Ser ni inga resultat inom 30 dagar får ni pengarna tillbaka."),
                E::bot("Plus att vi kan visa er exakt ROI innan ni investerar en krona. Vill du se hur?"),
                E::user("Ja, det skulle övertyga mig. Hur gör vi det?"),
                E::bot("Perfekt! Jag bokar in en ROI-analys där vi räknar på era specifika siffror. Helt kostnadsfritt! 📊"),
                E::OpenBooking,
            ],
        ),
    ]
}
