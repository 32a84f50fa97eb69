use std::collections::BTreeMap;

use smk_core::ProgressContext;
use smk_model::ModuleType;

use crate::issue::Issue;

pub fn check(ctx: &ProgressContext<'_>) -> Vec<Issue> {
    let modules = ctx.ordered_modules();
    let mut issues = Vec::new();

    let mut by_type: BTreeMap<ModuleType, usize> = BTreeMap::new();
    for module in &modules {
        *by_type.entry(module.module_type).or_insert(0) += 1;
    }
    for (module_type, count) in by_type {
        if count > 1 {
            issues.push(Issue::DuplicateModuleType { module_type, count });
        }
    }

    for (i, first) in modules.iter().enumerate() {
        for second in &modules[i + 1..] {
            if first.overlaps(second) {
                issues.push(Issue::ModulesOverlap {
                    first: first.id,
                    second: second.id,
                });
            }
        }
    }

    issues
}
