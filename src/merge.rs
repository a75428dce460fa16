use crate::types::{ConfigMap, ConfigValue, MergeStrategy};

/// Merge `overlay` into `base` using the given strategy.
pub fn merge(base: ConfigMap, overlay: ConfigMap, strategy: MergeStrategy) -> ConfigMap {
    match strategy {
        MergeStrategy::Union => union_merge(base, overlay),
        MergeStrategy::Overwrite => overwrite_merge(base, overlay),
    }
}

/// Recursive union of `overlay` on top of `base`.
/// If both sides have a mapping for the same key, recurse.
/// If both sides have an array, concatenate (base elements first).
/// Otherwise, `overlay`'s value wins.
pub fn union_merge(mut base: ConfigMap, overlay: ConfigMap) -> ConfigMap {
    for (key, overlay_val) in overlay {
        match (base.remove(&key), overlay_val) {
            (Some(ConfigValue::Object(base_map)), ConfigValue::Object(overlay_map)) => {
                base.insert(key, ConfigValue::Object(union_merge(base_map, overlay_map)));
            }
            (Some(ConfigValue::Array(mut base_arr)), ConfigValue::Array(overlay_arr)) => {
                base_arr.extend(overlay_arr);
                base.insert(key, ConfigValue::Array(base_arr));
            }
            (_, overlay_val) => {
                base.insert(key, overlay_val);
            }
        }
    }
    base
}

/// Flat merge: every top-level key of `overlay` replaces the one in `base`.
pub fn overwrite_merge(mut base: ConfigMap, overlay: ConfigMap) -> ConfigMap {
    base.extend(overlay);
    base
}
