//! Surname derivation strategies
//!
//! A child's surname is derived from a drawn base name. The allocator
//! only sees the `SurnameStrategy` trait, so the derivation can be
//! swapped without touching allocation.

/// Turns a drawn base name into a surname
pub trait SurnameStrategy: Send + Sync {
    fn derive(&self, base: &str, is_male: bool) -> String;
}

/// Returns the base name unchanged
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainSurname;

impl SurnameStrategy for PlainSurname {
    fn derive(&self, base: &str, _is_male: bool) -> String {
        base.to_string()
    }
}

/// Old Norse style patronymic: genitive of the base plus `son` or `dottir`
///
/// - `Erik` -> `Eriksson` / `Eriksdottir`
/// - `Helgi` -> `Helgason`
/// - `Ragnhild` -> `Ragnhildsdottir`
#[derive(Clone, Copy, Debug, Default)]
pub struct PatronymicSurname;

impl PatronymicSurname {
    pub const SON: &'static str = "son";
    pub const DAUGHTER: &'static str = "dottir";

    /// Simplified genitive form of a name
    pub fn genitive(base: &str) -> String {
        let trimmed = base.trim();
        match trimmed.chars().last() {
            None => String::new(),
            Some('a') | Some('i') => {
                let stem = &trimmed[..trimmed.len() - 1];
                format!("{}a", stem)
            }
            Some('s') => trimmed.to_string(),
            Some(_) => format!("{}s", trimmed),
        }
    }
}

impl SurnameStrategy for PatronymicSurname {
    fn derive(&self, base: &str, is_male: bool) -> String {
        let suffix = if is_male { Self::SON } else { Self::DAUGHTER };
        format!("{}{}", Self::genitive(base), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_passes_through() {
        assert_eq!(PlainSurname.derive("Ragnar", true), "Ragnar");
        assert_eq!(PlainSurname.derive("Astrid", false), "Astrid");
    }

    #[test]
    fn test_genitive_forms() {
        assert_eq!(PatronymicSurname::genitive("Erik"), "Eriks");
        assert_eq!(PatronymicSurname::genitive("Helgi"), "Helga");
        assert_eq!(PatronymicSurname::genitive("Helga"), "Helga");
        assert_eq!(PatronymicSurname::genitive("Ivars"), "Ivars");
        assert_eq!(PatronymicSurname::genitive(""), "");
    }

    #[test]
    fn test_patronymic_suffix_by_gender() {
        let strategy = PatronymicSurname;
        assert_eq!(strategy.derive("Erik", true), "Eriksson");
        assert_eq!(strategy.derive("Erik", false), "Eriksdottir");
        assert_eq!(strategy.derive("Helgi", true), "Helgason");
    }

    #[test]
    fn test_strategies_are_object_safe() {
        let strategies: Vec<Box<dyn SurnameStrategy>> =
            vec![Box::new(PlainSurname), Box::new(PatronymicSurname)];
        let derived: Vec<String> = strategies.iter().map(|s| s.derive("Knut", true)).collect();
        assert_eq!(derived, vec!["Knut", "Knutsson"]);
    }
}
