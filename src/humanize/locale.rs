//! Locale tables for relative and medium dates.

/// Relative-time unit chosen by the thresholds in `relative`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    FewSeconds,
    Seconds,
    Minute,
    Minutes,
    Hour,
    Hours,
    Day,
    Days,
    Month,
    Months,
    Year,
    Years,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Fr,
    Es,
    Pl,
}

impl Locale {
    /// Resolve a tag such as `en-US` or `fr_FR`; unknown tags fall back to English.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "fr" => Self::Fr,
            "es" => Self::Es,
            "pl" => Self::Pl,
            _ => Self::En,
        }
    }

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::Es => "es",
            Self::Pl => "pl",
        }
    }

    /// Phrase for `count` of `unit`, without the past/future wrapper.
    #[must_use]
    pub fn unit_phrase(self, unit: Unit, count: i64) -> String {
        match self {
            Self::En => english(unit, count),
            Self::Fr => french(unit, count),
            Self::Es => spanish(unit, count),
            Self::Pl => polish(unit, count),
        }
    }

    /// Wrap a unit phrase as past (`ago`) or future.
    #[must_use]
    pub fn wrap(self, phrase: &str, future: bool) -> String {
        match (self, future) {
            (Self::En, false) => format!("{phrase} ago"),
            (Self::En, true) => format!("in {phrase}"),
            (Self::Fr, false) => format!("il y a {phrase}"),
            (Self::Fr, true) => format!("dans {phrase}"),
            (Self::Es, false) => format!("hace {phrase}"),
            (Self::Es, true) => format!("en {phrase}"),
            (Self::Pl, false) => format!("{phrase} temu"),
            (Self::Pl, true) => format!("za {phrase}"),
        }
    }

    /// Medium date, e.g. `Oct 18, 2026`.
    #[must_use]
    pub fn medium_date(self, year: i32, month: u8, day: u8) -> String {
        let index = usize::from(month.clamp(1, 12) - 1);
        match self {
            Self::En => format!("{} {day}, {year}", EN_MONTHS[index]),
            Self::Fr => format!("{day} {} {year}", FR_MONTHS[index]),
            Self::Es => format!("{day} de {} de {year}", ES_MONTHS[index]),
            Self::Pl => format!("{day} {} {year}", PL_MONTHS[index]),
        }
    }
}

const EN_MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];
const FR_MONTHS: [&str; 12] =
    ["janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.", "déc."];
const ES_MONTHS: [&str; 12] =
    ["ene.", "feb.", "mar.", "abr.", "may.", "jun.", "jul.", "ago.", "sept.", "oct.", "nov.", "dic."];
const PL_MONTHS: [&str; 12] = ["sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paź", "lis", "gru"];

fn english(unit: Unit, n: i64) -> String {
    match unit {
        Unit::FewSeconds => "a few seconds".into(),
        Unit::Seconds => format!("{n} seconds"),
        Unit::Minute => "a minute".into(),
        Unit::Minutes => format!("{n} minutes"),
        Unit::Hour => "an hour".into(),
        Unit::Hours => format!("{n} hours"),
        Unit::Day => "a day".into(),
        Unit::Days => format!("{n} days"),
        Unit::Month => "a month".into(),
        Unit::Months => format!("{n} months"),
        Unit::Year => "a year".into(),
        Unit::Years => format!("{n} years"),
    }
}

fn french(unit: Unit, n: i64) -> String {
    match unit {
        Unit::FewSeconds => "quelques secondes".into(),
        Unit::Seconds => format!("{n} secondes"),
        Unit::Minute => "une minute".into(),
        Unit::Minutes => format!("{n} minutes"),
        Unit::Hour => "une heure".into(),
        Unit::Hours => format!("{n} heures"),
        Unit::Day => "un jour".into(),
        Unit::Days => format!("{n} jours"),
        Unit::Month => "un mois".into(),
        Unit::Months => format!("{n} mois"),
        Unit::Year => "un an".into(),
        Unit::Years => format!("{n} ans"),
    }
}

fn spanish(unit: Unit, n: i64) -> String {
    match unit {
        Unit::FewSeconds => "unos segundos".into(),
        Unit::Seconds => format!("{n} segundos"),
        Unit::Minute => "un minuto".into(),
        Unit::Minutes => format!("{n} minutos"),
        Unit::Hour => "una hora".into(),
        Unit::Hours => format!("{n} horas"),
        Unit::Day => "un día".into(),
        Unit::Days => format!("{n} días"),
        Unit::Month => "un mes".into(),
        Unit::Months => format!("{n} meses"),
        Unit::Year => "un año".into(),
        Unit::Years => format!("{n} años"),
    }
}

// Polish picks the paucal form for 2-4, except 12-14.
fn polish_paucal(n: i64) -> bool {
    let last = n % 10;
    (2..=4).contains(&last) && (n / 10) % 10 != 1
}

fn polish(unit: Unit, n: i64) -> String {
    let pick = |paucal: &str, many: &str| {
        if polish_paucal(n) { format!("{n} {paucal}") } else { format!("{n} {many}") }
    };
    match unit {
        Unit::FewSeconds => "kilka sekund".into(),
        Unit::Seconds => pick("sekundy", "sekund"),
        Unit::Minute => "minutę".into(),
        Unit::Minutes => pick("minuty", "minut"),
        Unit::Hour => "godzinę".into(),
        Unit::Hours => pick("godziny", "godzin"),
        Unit::Day => "1 dzień".into(),
        Unit::Days => format!("{n} dni"),
        Unit::Month => "miesiąc".into(),
        Unit::Months => pick("miesiące", "miesięcy"),
        Unit::Year => "rok".into(),
        Unit::Years => pick("lata", "lat"),
    }
}
