/// Action verbs the rubric and bullet guidance look for. Configuration data,
/// deliberately not exposed for runtime mutation.
pub const ACTION_VERBS: [&str; 25] = [
    "built",
    "developed",
    "designed",
    "implemented",
    "led",
    "improved",
    "created",
    "optimized",
    "automated",
    "managed",
    "deployed",
    "architected",
    "configured",
    "integrated",
    "launched",
    "refactored",
    "migrated",
    "scaled",
    "delivered",
    "resolved",
    "mentored",
    "coordinated",
    "established",
    "reduced",
    "increased",
];
