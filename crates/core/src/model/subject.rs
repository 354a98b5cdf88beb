use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a subject key falls outside the closed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown subject key: {key}")]
pub struct UnknownSubject {
    pub key: String,
}

/// Closed set of subject areas covered by the question catalog.
///
/// The wire representation is the lowercase key used by the catalog and
/// the persisted progress record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKey {
    Portugues,
    Ingles,
    Matematica,
    Logica,
    Constitucional,
    Administrativo,
    Eleitoral,
    Financeira,
    Bancarios,
    Informatica,
    Atualidades,
    Etica,
}

impl SubjectKey {
    pub const ALL: [SubjectKey; 12] = [
        SubjectKey::Portugues,
        SubjectKey::Ingles,
        SubjectKey::Matematica,
        SubjectKey::Logica,
        SubjectKey::Constitucional,
        SubjectKey::Administrativo,
        SubjectKey::Eleitoral,
        SubjectKey::Financeira,
        SubjectKey::Bancarios,
        SubjectKey::Informatica,
        SubjectKey::Atualidades,
        SubjectKey::Etica,
    ];

    /// Stable lowercase key, as stored in the catalog and progress record.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SubjectKey::Portugues => "portugues",
            SubjectKey::Ingles => "ingles",
            SubjectKey::Matematica => "matematica",
            SubjectKey::Logica => "logica",
            SubjectKey::Constitucional => "constitucional",
            SubjectKey::Administrativo => "administrativo",
            SubjectKey::Eleitoral => "eleitoral",
            SubjectKey::Financeira => "financeira",
            SubjectKey::Bancarios => "bancarios",
            SubjectKey::Informatica => "informatica",
            SubjectKey::Atualidades => "atualidades",
            SubjectKey::Etica => "etica",
        }
    }

    /// Human-readable subject label.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            SubjectKey::Portugues => "Língua Portuguesa",
            SubjectKey::Ingles => "Língua Inglesa",
            SubjectKey::Matematica => "Matemática",
            SubjectKey::Logica => "Raciocínio Lógico",
            SubjectKey::Constitucional => "Direito Constitucional",
            SubjectKey::Administrativo => "Direito Administrativo",
            SubjectKey::Eleitoral => "Direito Eleitoral",
            SubjectKey::Financeira => "Matemática Financeira",
            SubjectKey::Bancarios => "Conhecimentos Bancários",
            SubjectKey::Informatica => "Noções de Informática",
            SubjectKey::Atualidades => "Atualidades",
            SubjectKey::Etica => "Ética no Serviço Público",
        }
    }
}

impl fmt::Display for SubjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubjectKey {
    type Err = UnknownSubject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| UnknownSubject { key: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_key() {
        for subject in SubjectKey::ALL {
            let parsed: SubjectKey = subject.as_str().parse().unwrap();
            assert_eq!(parsed, subject);
        }
    }

    #[test]
    fn rejects_keys_outside_the_closed_set() {
        let err = "geografia".parse::<SubjectKey>().unwrap_err();
        assert_eq!(err.key, "geografia");
    }

    #[test]
    fn serde_uses_the_lowercase_key() {
        let json = serde_json::to_string(&SubjectKey::Logica).unwrap();
        assert_eq!(json, "\"logica\"");
        let back: SubjectKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SubjectKey::Logica);
    }
}
