mod layout;

use crate::model::{BlueprintNode, Tier};

pub(crate) fn node(id: &str, title: &str, x: f64, y: f64) -> BlueprintNode {
    BlueprintNode {
        id: id.to_string(),
        title: title.to_string(),
        color: "#4466ff".to_string(),
        x,
        y,
        points: vec!["first".to_string(), "second".to_string()],
        icon: None,
        tier: None,
    }
}

pub(crate) fn tiered_node(id: &str, y: f64, tier: Tier) -> BlueprintNode {
    let mut n = node(id, id, 500.0, y);
    n.tier = Some(tier);
    n
}
