//! Rule registry mapping rule ids to rule implementations.

use std::collections::BTreeMap;

use cracklint_config::MergedConfig;

use crate::{EnabledRule, Rule, RuleDescriptor};

/// Trait for rules shipped with cracklint.
pub trait BuiltinRule: Rule + Default + 'static {
    /// Metadata for this rule; its `id` is the registry key.
    const DESCRIPTOR: &'static RuleDescriptor;
}

/// A factory function that creates a boxed rule.
type RuleFactory = fn() -> Box<dyn Rule>;

struct Registration {
    descriptor: &'static RuleDescriptor,
    factory: RuleFactory,
}

/// Registry mapping rule ids to rule factories, ordered by id.
pub struct RuleRegistry {
    rules: BTreeMap<&'static str, Registration>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in rules registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register_builtins();
        registry
    }

    /// Register a rule type.
    pub fn register<R: BuiltinRule>(&mut self) {
        self.rules.insert(
            R::DESCRIPTOR.id,
            Registration {
                descriptor: R::DESCRIPTOR,
                factory: || Box::new(R::default()),
            },
        );
    }

    /// Register all built-in rules.
    fn register_builtins(&mut self) {
        use crate::rules::IfReturnTrue;
        // Usage rules
        self.register::<IfReturnTrue>();
    }

    /// Create a rule by id. Returns None if the id is not registered.
    pub fn create_rule(&self, id: &str) -> Option<Box<dyn Rule>> {
        self.rules
            .get(id)
            .map(|registration| (registration.factory)())
    }

    /// Check if a rule id is registered.
    pub fn has_rule(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    /// Look up a rule's descriptor by id.
    pub fn descriptor(&self, id: &str) -> Option<&'static RuleDescriptor> {
        self.rules.get(id).map(|registration| registration.descriptor)
    }

    /// All registered descriptors, ordered by id.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static RuleDescriptor> + '_ {
        self.rules.values().map(|registration| registration.descriptor)
    }

    /// Instantiate every rule the configuration leaves enabled, at its
    /// configured severity.
    pub fn enabled_rules(&self, config: &MergedConfig) -> Vec<EnabledRule> {
        self.rules
            .values()
            .filter_map(|registration| {
                let descriptor = registration.descriptor;
                let severity = config.effective_severity(
                    descriptor.id,
                    descriptor.default_severity,
                    descriptor.enabled_by_default,
                )?;
                Some(EnabledRule::new((registration.factory)(), severity))
            })
            .collect()
    }

    /// Configured ids that do not name a registered rule.
    pub fn unknown_ids<'c>(&self, config: &'c MergedConfig) -> Vec<&'c str> {
        config
            .configured_ids()
            .into_iter()
            .filter(|id| !self.has_rule(id))
            .collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
