//! Indexed tag data for serialisation decisions.

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use kstring::KString;
use lazy_static::lazy_static;

use crate::types::TagDescriptor;

// https://developer.mozilla.org/en-US/docs/Glossary/Void_element
// plus the obsolete keygen and menuitem, which older pages still use.
pub const VOID_ELEMENT_NAMES: &[&str] = &[
    "area",
    "base",
    "br",
    "col",
    "embed",
    "hr",
    "img",
    "input",
    "keygen",
    "link",
    "menuitem",
    "meta",
    "param",
    "source",
    "track",
    "wbr",
];

#[derive(Debug)]
pub struct MetaDb {
    // keys are lowercase
    pub elementmeta: HashMap<KString, TagDescriptor>,
}

impl MetaDb {
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = TagDescriptor>
    ) -> Result<MetaDb> {
        let mut elementmeta = HashMap::new();
        for desc in descriptors {
            let key = KString::from_string(desc.name.to_ascii_lowercase());
            if key.is_empty() {
                bail!("tag descriptor with empty name");
            }
            if elementmeta.insert(key.clone(), desc).is_some() {
                bail!("duplicate tag descriptor for {key:?}");
            }
        }
        Ok(MetaDb { elementmeta })
    }

    /// Read a JSON array of `{"name": .., "void": ..}` objects.
    pub fn from_json_str(s: &str) -> Result<MetaDb> {
        let descriptors: Vec<TagDescriptor> = serde_json::from_str(s)
            .context("parsing tag descriptors")?;
        Self::from_descriptors(descriptors)
    }

    /// Case-insensitive. Tags not in the database are treated as
    /// regular (non-void) elements.
    pub fn tag_descriptor(&self, tag_name: &str) -> TagDescriptor {
        let lower = tag_name.to_ascii_lowercase();
        match self.elementmeta.get(lower.as_str()) {
            Some(desc) => TagDescriptor {
                name: KString::from_ref(tag_name),
                void: desc.void,
            },
            None => TagDescriptor {
                name: KString::from_ref(tag_name),
                void: false,
            },
        }
    }

    pub fn is_void(&self, tag_name: &str) -> bool {
        self.tag_descriptor(tag_name).void
    }
}

pub fn read_meta_db() -> Result<MetaDb> {
    MetaDb::from_descriptors(VOID_ELEMENT_NAMES.iter().map(|name| TagDescriptor {
        name: KString::from_static(*name),
        void: true,
    }))
}

lazy_static!{
    pub static ref METADB: MetaDb = read_meta_db()
        .expect("the built-in void element list has no duplicates");
}
