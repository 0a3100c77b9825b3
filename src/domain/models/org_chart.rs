use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;

use crate::error::AppError;

const MAX_DEPTH: usize = 10;
const MAX_NODES: usize = 500;

/// One box of an org chart. The tree is parsed and validated at the
/// boundary instead of storing arbitrary client JSON.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OrgNode {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub employee_count: i64,
    #[serde(default)]
    pub children: Vec<OrgNode>,
}

impl OrgNode {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut nodes = 0;
        self.check(1, &mut nodes)
    }

    fn check(&self, depth: usize, nodes: &mut usize) -> Result<(), AppError> {
        if depth > MAX_DEPTH {
            return Err(AppError::Validation("Structure trop profonde".into()));
        }
        *nodes += 1;
        if *nodes > MAX_NODES {
            return Err(AppError::Validation("Structure trop volumineuse".into()));
        }
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Chaque nœud doit avoir un nom".into()));
        }
        for child in &self.children {
            child.check(depth + 1, nodes)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct OrganizationalChart {
    pub id: String,
    pub tenant_id: String,
    pub user_id: Option<String>,
    pub nom: String,
    pub description: Option<String>,
    pub structure: Json<OrgNode>,
    pub actif: bool,
    pub created_at: DateTime<Utc>,
}

impl OrganizationalChart {
    pub fn new(
        tenant_id: String,
        user_id: String,
        nom: String,
        description: Option<String>,
        structure: OrgNode,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id,
            user_id: Some(user_id),
            nom,
            description,
            structure: Json(structure),
            actif: true,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str) -> OrgNode {
        OrgNode {
            name: name.to_string(),
            title: "Agent".to_string(),
            employee_count: 1,
            children: vec![],
        }
    }

    #[test]
    fn accepts_reasonable_tree() {
        let root = OrgNode {
            name: "Direction Générale".to_string(),
            title: "DG".to_string(),
            employee_count: 1,
            children: vec![leaf("RH"), leaf("Finance")],
        };
        assert!(root.validate().is_ok());
    }

    #[test]
    fn rejects_blank_node_name() {
        let root = OrgNode {
            name: "  ".to_string(),
            title: "DG".to_string(),
            employee_count: 0,
            children: vec![],
        };
        assert!(root.validate().is_err());
    }

    #[test]
    fn rejects_excessive_depth() {
        let mut node = leaf("bottom");
        for i in 0..12 {
            node = OrgNode {
                name: format!("level-{i}"),
                title: "Chef".to_string(),
                employee_count: 0,
                children: vec![node],
            };
        }
        assert!(node.validate().is_err());
    }
}
