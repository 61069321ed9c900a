//! Per-verb call options
//!
//! Explicit option structs, one per store verb, with defaults that are always
//! valid: unset fields simply do not affect the request. Setters are
//! chainable and last-write-wins, so combining them is order-independent as
//! long as they touch different fields.

/// Target identity for a create; the resource itself carries no meta yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOptions {
    pub name: String,
    pub mesh: String,
}

impl CreateOptions {
    pub fn by_key(name: impl Into<String>, mesh: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: mesh.into(),
        }
    }
}

/// Placeholder for future concurrency-token checks; currently carries no
/// effect. Update always targets the resource's own meta.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOptions {}

/// Target identity for a get.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOptions {
    pub name: String,
    pub mesh: String,
}

impl GetOptions {
    pub fn by_key(name: impl Into<String>, mesh: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: mesh.into(),
        }
    }
}

/// Target identity for a delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteOptions {
    pub name: String,
    pub mesh: String,
}

impl DeleteOptions {
    pub fn by_key(name: impl Into<String>, mesh: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh: mesh.into(),
        }
    }
}

/// Scope and pagination for a list. Pagination parameters are emitted only
/// when set; a page size may appear without an offset (the server starts at
/// the beginning).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub mesh: String,
    pub page_size: Option<u32>,
    pub page_offset: Option<String>,
}

impl ListOptions {
    pub fn by_mesh(mesh: impl Into<String>) -> Self {
        Self {
            mesh: mesh.into(),
            ..Self::default()
        }
    }

    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn with_page_offset(mut self, offset: impl Into<String>) -> Self {
        self.page_offset = Some(offset.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_unset() {
        let opts = ListOptions::default();
        assert_eq!(opts.mesh, "");
        assert_eq!(opts.page_size, None);
        assert_eq!(opts.page_offset, None);
    }

    #[test]
    fn test_by_key_sets_both_fields() {
        let opts = GetOptions::by_key("res-1", "default");
        assert_eq!(opts.name, "res-1");
        assert_eq!(opts.mesh, "default");
    }

    #[test]
    fn test_list_setters_chain() {
        let opts = ListOptions::by_mesh("demo")
            .with_page_size(1)
            .with_page_offset("2");
        assert_eq!(opts.mesh, "demo");
        assert_eq!(opts.page_size, Some(1));
        assert_eq!(opts.page_offset.as_deref(), Some("2"));
    }

    #[test]
    fn test_last_write_wins() {
        let opts = ListOptions::by_mesh("demo")
            .with_page_size(10)
            .with_page_size(1);
        assert_eq!(opts.page_size, Some(1));
    }

    #[test]
    fn test_page_size_without_offset_is_valid() {
        let opts = ListOptions::by_mesh("demo").with_page_size(5);
        assert_eq!(opts.page_size, Some(5));
        assert_eq!(opts.page_offset, None);
    }
}
