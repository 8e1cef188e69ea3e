use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub i64);

impl ResourceId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "resource id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ResourceId> for i64 {
    fn from(value: ResourceId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone)]
pub struct NewResource {
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone)]
pub struct ResourceGroup {
    pub category: String,
    pub resources: Vec<Resource>,
}

/// Group an already ordered listing by category. Groups appear in the order
/// their category is first seen and members keep their relative order.
pub fn group_by_category(resources: Vec<Resource>) -> Vec<ResourceGroup> {
    let mut groups: Vec<ResourceGroup> = Vec::new();
    for resource in resources {
        match groups
            .iter_mut()
            .find(|group| group.category == resource.category)
        {
            Some(group) => group.resources.push(resource),
            None => groups.push(ResourceGroup {
                category: resource.category.clone(),
                resources: vec![resource],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: i64, category: &str, sort_order: i32) -> Resource {
        Resource {
            id: ResourceId::new(id).unwrap(),
            title: format!("r{id}"),
            url: String::new(),
            description: String::new(),
            category: category.into(),
            sort_order,
        }
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let groups = group_by_category(vec![
            resource(1, "composants", 0),
            resource(2, "composants", 1),
            resource(3, "logiciels", 0),
        ]);
        let categories: Vec<_> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["composants", "logiciels"]);
        let ids: Vec<_> = groups[0].resources.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn empty_listing_has_no_groups() {
        assert!(group_by_category(Vec::new()).is_empty());
    }
}
