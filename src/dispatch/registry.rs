use std::collections::HashMap;

/// ProgID → endpoint table, standing in for the platform's object registry.
/// Unknown names fail resolution before any network traffic happens.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    entries: HashMap<String, String>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, prog_id: impl Into<String>, endpoint: impl Into<String>) {
        self.entries.insert(prog_id.into(), endpoint.into());
    }

    pub fn lookup(&self, prog_id: &str) -> Option<&str> {
        self.entries.get(prog_id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_name_resolves_to_endpoint() {
        let mut registry = ServiceRegistry::new();
        registry.register("HelloWorldLib.HelloWorld", "http://127.0.0.1:7878");

        assert_eq!(
            registry.lookup("HelloWorldLib.HelloWorld"),
            Some("http://127.0.0.1:7878")
        );
    }

    #[test]
    fn test_unregistered_name_is_absent() {
        let registry = ServiceRegistry::new();
        assert_eq!(registry.lookup("NoSuchLib.NoSuchObject"), None);
    }

    #[test]
    fn test_reregistering_replaces_endpoint() {
        let mut registry = ServiceRegistry::new();
        registry.register("HelloWorldLib.HelloWorld", "http://old:1");
        registry.register("HelloWorldLib.HelloWorld", "http://new:2");

        assert_eq!(registry.lookup("HelloWorldLib.HelloWorld"), Some("http://new:2"));
    }
}
