pub(crate) mod snapshot {
    use serde::{de, Serialize};

    pub const SERIALIZATION_VERSION_V1: u8 = 1u8;

    pub(crate) fn serialize<T>(value: &T) -> Result<Vec<u8>, String>
    where
        T: ?Sized + Serialize,
    {
        let data = serde_json::to_vec_pretty(value).map_err(|err| err.to_string())?;

        let mut result = vec![SERIALIZATION_VERSION_V1];
        result.extend(data);

        Ok(result)
    }

    pub(crate) fn deserialize<'a, T>(bytes: &'a [u8]) -> Result<T, String>
    where
        T: de::Deserialize<'a>,
    {
        match bytes.split_first() {
            Some((&SERIALIZATION_VERSION_V1, data)) => {
                let value: T = serde_json::from_slice(data).map_err(|err| err.to_string())?;

                Ok(value)
            }
            Some(_) => Err("Unsupported serialization version".to_string()),
            None => Err("Empty snapshot".to_string()),
        }
    }
}

pub mod query {
    use regex::Regex;
    use std::sync::OnceLock;

    /// Parsed search query: free terms plus `field:value` filters.
    ///
    /// Values may be quoted (`author:"Анна Смирнова"`), quoted free terms keep
    /// their inner whitespace.
    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Query {
        pub terms: Vec<String>,
        pub field_filters: Vec<(String, String)>,
    }

    fn tokenizer() -> Option<&'static Regex> {
        static TOKENIZER: OnceLock<Option<Regex>> = OnceLock::new();
        TOKENIZER
            .get_or_init(|| {
                Regex::new(r#"([\w-]+):"([^"]*)"|([\w-]+):(\S+)|"([^"]*)"|(\S+)"#).ok()
            })
            .as_ref()
    }

    impl Query {
        pub fn new(query: &str) -> Self {
            let mut terms = Vec::new();
            let mut field_filters = Vec::new();

            match tokenizer() {
                Some(re) => {
                    for caps in re.captures_iter(query) {
                        if let (Some(field), Some(value)) =
                            (caps.get(1).or(caps.get(3)), caps.get(2).or(caps.get(4)))
                        {
                            field_filters
                                .push((field.as_str().to_lowercase(), value.as_str().to_string()));
                        } else if let Some(term) = caps.get(5).or(caps.get(6)) {
                            if !term.as_str().is_empty() {
                                terms.push(term.as_str().to_string());
                            }
                        }
                    }
                }
                None => {
                    terms.extend(query.split_whitespace().map(|t| t.to_string()));
                }
            }

            Query {
                terms,
                field_filters,
            }
        }
    }

    /// Case-insensitive substring containment.
    pub fn text_matches(text: &str, value: &str) -> bool {
        text.to_lowercase().contains(&value.to_lowercase())
    }

    pub fn text_exact_matches(text: &str, value: &str) -> bool {
        text.to_lowercase() == value.to_lowercase()
    }
}

pub mod format {
    pub fn format_likes_count(count: u32) -> String {
        if count < 1_000 {
            count.to_string()
        } else if count < 1_000_000 {
            format!("{:.1}К", f64::from(count) / 1_000.0)
        } else {
            format!("{:.1}М", f64::from(count) / 1_000_000.0)
        }
    }

    pub fn format_participants_count(count: u32) -> String {
        match count {
            1 => "1 участник".to_string(),
            2..=4 => format!("{count} участника"),
            _ => format!("{count} участников"),
        }
    }

    /// Picks the Russian noun form for `count`: one, few, many.
    fn plural<'a>(count: i64, forms: [&'a str; 3]) -> &'a str {
        let (rem10, rem100) = (count % 10, count % 100);
        if rem10 == 1 && rem100 != 11 {
            forms[0]
        } else if (2..=4).contains(&rem10) && !(12..=14).contains(&rem100) {
            forms[1]
        } else {
            forms[2]
        }
    }

    /// Relative time in Russian, using the largest whole unit:
    /// "5 минут назад", "через 2 дня".
    pub fn format_time_ago(
        date: chrono::DateTime<chrono::Utc>,
        now: chrono::DateTime<chrono::Utc>,
    ) -> String {
        let elapsed = now.signed_duration_since(date);
        let seconds = elapsed.num_seconds().abs();

        let (count, forms) = if seconds < 60 {
            (seconds, ["секунду", "секунды", "секунд"])
        } else if seconds < 3_600 {
            (seconds / 60, ["минуту", "минуты", "минут"])
        } else if seconds < 86_400 {
            (seconds / 3_600, ["час", "часа", "часов"])
        } else if seconds < 7 * 86_400 {
            (seconds / 86_400, ["день", "дня", "дней"])
        } else if seconds < 30 * 86_400 {
            (seconds / (7 * 86_400), ["неделю", "недели", "недель"])
        } else if seconds < 365 * 86_400 {
            (seconds / (30 * 86_400), ["месяц", "месяца", "месяцев"])
        } else {
            (seconds / (365 * 86_400), ["год", "года", "лет"])
        };

        let unit = plural(count, forms);
        if elapsed < chrono::Duration::zero() {
            format!("через {count} {unit}")
        } else {
            format!("{count} {unit} назад")
        }
    }
}

/// JSON schema of a model type, as consumed by tooling outside the app.
pub fn schema<T: schemars::JsonSchema>() -> serde_json::Value {
    schemars::schema_for!(T).to_value()
}
