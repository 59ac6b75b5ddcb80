use crate::engine::NameParts;
use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Serializes as a list of zero, one or two strings, family name first.
impl Serialize for NameParts {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for part in self.iter() {
            seq.serialize_element(part)?;
        }
        seq.end()
    }
}

impl NameParts {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::Engine;

    #[test]
    fn json() {
        let engine = Engine::new();
        assert_eq!(
            r#"["van Haag","Bram"]"#,
            engine.nameparts("Bram van Haag").to_json()
        );
        assert_eq!(r#"["Madonna"]"#, engine.nameparts("Madonna").to_json());
        assert_eq!("[]", engine.nameparts("").to_json());
    }
}
