use uuid::Uuid;

/// Source of fresh note ids.
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> String;
}

/// Random v4 UUIDs, rendered hyphenated.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
