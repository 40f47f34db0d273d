//! Class catalogue model.

use serde::Serialize;

/// A class offered by the academy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    /// Unique class ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Teaching modality (e.g. "Presencial", "Virtual").
    pub modality: String,
    /// Description.
    pub description: String,
    /// Optional image URL.
    pub image: Option<String>,
    /// Whether the class is currently offered.
    pub active: bool,
}

/// Data for registering a new class. New classes start active.
#[derive(Debug, Clone)]
pub struct NewClass {
    pub name: String,
    pub modality: String,
    pub description: String,
    pub image: Option<String>,
}

impl NewClass {
    /// Create a new class without an image.
    pub fn new(
        name: impl Into<String>,
        modality: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            modality: modality.into(),
            description: description.into(),
            image: None,
        }
    }

    /// Set the image.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Full replacement of a class's descriptive fields.
///
/// The active flag is changed separately.
#[derive(Debug, Clone)]
pub struct ClassUpdate {
    pub name: String,
    pub modality: String,
    pub description: String,
    pub image: Option<String>,
}

impl From<NewClass> for ClassUpdate {
    fn from(class: NewClass) -> Self {
        Self {
            name: class.name,
            modality: class.modality,
            description: class.description,
            image: class.image,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct ClassRow {
    id_clase: i64,
    nombre_clase: String,
    modalidad: String,
    descripcion: String,
    imagen: Option<String>,
    estado: bool,
}

impl ClassRow {
    pub(crate) fn into_class(self) -> ClassRecord {
        ClassRecord {
            id: self.id_clase,
            name: self.nombre_clase,
            modality: self.modalidad,
            description: self.descripcion,
            image: self.imagen,
            active: self.estado,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_class() {
        let class = NewClass::new("Piano", "Presencial", "Piano inicial");
        assert_eq!(class.name, "Piano");
        assert!(class.image.is_none());

        let class = class.with_image("https://example.com/piano.png");
        assert_eq!(class.image.as_deref(), Some("https://example.com/piano.png"));
    }

    #[test]
    fn test_update_from_new_class() {
        let update: ClassUpdate = NewClass::new("Violín", "Virtual", "Cuerdas").into();
        assert_eq!(update.name, "Violín");
        assert_eq!(update.modality, "Virtual");
    }

    #[test]
    fn test_class_record_serializes_camel_case() {
        let class = ClassRecord {
            id: 3,
            name: "Canto".to_string(),
            modality: "Presencial".to_string(),
            description: "Técnica vocal".to_string(),
            image: None,
            active: true,
        };
        let json = serde_json::to_value(&class).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["active"], true);
        assert!(json["image"].is_null());
    }
}
