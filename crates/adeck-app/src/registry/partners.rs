//! In-memory partner banner collection

use rand::distributions::Alphanumeric;
use rand::Rng;

use adeck_core::prelude::*;
use adeck_core::Partner;

/// Length of generated partner ids
const PARTNER_ID_LEN: usize = 9;

/// Ordered collection of partner banners.
///
/// Unlike the other registries, new entries are created here from raw form
/// fields: the registry validates them and mints the id.
#[derive(Debug, Default)]
pub struct PartnerRegistry {
    partners: Vec<Partner>,
}

impl PartnerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partners(partners: Vec<Partner>) -> Self {
        Self { partners }
    }

    /// All partners in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Partner> {
        self.partners.iter()
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Partner> {
        self.partners.iter().find(|p| p.id == id)
    }

    /// Append a new partner banner.
    ///
    /// Name and banner image are required; the link may be empty. A fresh
    /// random id is minted for the entry.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        image_url: impl Into<String>,
        link: impl Into<String>,
    ) -> Result<&Partner> {
        let name = name.into();
        let image_url = image_url.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_partner("name is required"));
        }
        if image_url.trim().is_empty() {
            return Err(Error::invalid_partner("banner image is required"));
        }

        let id = self.fresh_id();
        info!("Added partner '{}' ({})", name, id);
        let idx = self.partners.len();
        self.partners.push(Partner {
            id,
            name,
            image_url,
            link: link.into(),
        });
        Ok(&self.partners[idx])
    }

    /// Delete the partner with the given id, returning the removed record
    pub fn remove(&mut self, id: &str) -> Result<Partner> {
        let pos = self
            .partners
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::partner_not_found(id))?;
        let removed = self.partners.remove(pos);
        info!("Removed partner '{}' ({})", removed.name, removed.id);
        Ok(removed)
    }

    /// Mint a random 9-char alphanumeric id not already in use
    fn fresh_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let id: String = (&mut rng)
                .sample_iter(Alphanumeric)
                .take(PARTNER_ID_LEN)
                .map(|b| (b as char).to_ascii_lowercase())
                .collect();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> PartnerRegistry {
        PartnerRegistry::with_partners(vec![
            Partner {
                id: "p1".to_string(),
                name: "Vortex Hosting".to_string(),
                image_url: "https://images.unsplash.com/photo-1550745165".to_string(),
                link: "#".to_string(),
            },
            Partner {
                id: "p2".to_string(),
                name: "HyperX Labs".to_string(),
                image_url: "https://images.unsplash.com/photo-1542751371".to_string(),
                link: "#".to_string(),
            },
        ])
    }

    #[test]
    fn test_add_appends_with_fresh_id() {
        let mut registry = seeded();
        let id = registry
            .add("Night City Nets", "http://x/banner.png", "https://ncn.example")
            .unwrap()
            .id
            .clone();
        assert_eq!(registry.len(), 3);
        assert_eq!(id.len(), PARTNER_ID_LEN);
        assert_ne!(id, "p1");
        assert_ne!(id, "p2");
        // Appended at the end of the ordered sequence
        assert_eq!(registry.iter().last().unwrap().id, id);
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut registry = seeded();
        let err = registry.add("", "http://x", "").unwrap_err();
        assert!(matches!(err, Error::InvalidPartner { .. }));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_add_rejects_blank_image() {
        let mut registry = seeded();
        let err = registry.add("Vortex", "   ", "").unwrap_err();
        assert!(matches!(err, Error::InvalidPartner { .. }));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_add_allows_empty_link() {
        let mut registry = seeded();
        assert!(registry.add("Linkless", "http://x", "").is_ok());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_remove_present() {
        let mut registry = seeded();
        let removed = registry.remove("p1").unwrap();
        assert_eq!(removed.name, "Vortex Hosting");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove_missing_leaves_registry_unchanged() {
        let mut registry = seeded();
        let err = registry.remove("p9").unwrap_err();
        assert!(matches!(err, Error::PartnerNotFound { .. }));
        assert_eq!(registry.len(), 2);
    }
}
