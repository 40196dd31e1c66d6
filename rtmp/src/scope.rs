//! Scope lookup used to decide whether clients may sample the audio and video they play.
//!
//! A connection lives inside a scope (usually the RTMP application it connected to).  Scopes
//! carry named components, and the component registered under `SAMPLE_ACCESS_COMPONENT` answers
//! whether audio and video sampling is permitted in that scope.  When no such component exists
//! the sample access announcement is skipped entirely.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Name a sample access policy is registered under in a scope
pub const SAMPLE_ACCESS_COMPONENT: &str = "rtmpSampleAccess";

/// Answers whether raw audio and video samples may be accessed by the client's player
pub trait SampleAccessPolicy {
    fn is_audio_allowed(&self, scope: &dyn Scope) -> bool;
    fn is_video_allowed(&self, scope: &dyn Scope) -> bool;
}

pub trait Scope {
    fn get_name(&self) -> &str;
    fn has_component(&self, name: &str) -> bool;
    fn get_component(&self, name: &str) -> Option<Rc<dyn SampleAccessPolicy>>;
}

/// A named scope with a registry of components
pub struct ComponentScope {
    name: String,
    components: HashMap<String, Rc<dyn SampleAccessPolicy>>,
}

impl ComponentScope {
    pub fn new(name: &str) -> ComponentScope {
        ComponentScope {
            name: name.to_string(),
            components: HashMap::new(),
        }
    }

    /// Registers a component, returning the one it replaced if any
    pub fn register_component(
        &mut self,
        name: &str,
        component: Rc<dyn SampleAccessPolicy>,
    ) -> Option<Rc<dyn SampleAccessPolicy>> {
        self.components.insert(name.to_string(), component)
    }

    pub fn remove_component(&mut self, name: &str) -> Option<Rc<dyn SampleAccessPolicy>> {
        self.components.remove(name)
    }
}

impl Scope for ComponentScope {
    fn get_name(&self) -> &str {
        &self.name
    }

    fn has_component(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    fn get_component(&self, name: &str) -> Option<Rc<dyn SampleAccessPolicy>> {
        self.components.get(name).cloned()
    }
}

impl fmt::Debug for ComponentScope {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut names: Vec<&String> = self.components.keys().collect();
        names.sort();

        f.debug_struct("ComponentScope")
            .field("name", &self.name)
            .field("components", &names)
            .finish()
    }
}

/// A sample access policy that gives the same answer for every scope
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleAccessConfig {
    pub audio_allowed: bool,
    pub video_allowed: bool,
}

impl SampleAccessConfig {
    /// Creates a policy that denies both audio and video sampling
    pub fn new() -> SampleAccessConfig {
        SampleAccessConfig {
            audio_allowed: false,
            video_allowed: false,
        }
    }
}

impl Default for SampleAccessConfig {
    fn default() -> Self {
        SampleAccessConfig::new()
    }
}

impl SampleAccessPolicy for SampleAccessConfig {
    fn is_audio_allowed(&self, _scope: &dyn Scope) -> bool {
        self.audio_allowed
    }

    fn is_video_allowed(&self, _scope: &dyn Scope) -> bool {
        self.video_allowed
    }
}

/// A sample access policy with per scope overrides, keyed by scope name
#[derive(Clone, Debug, Default)]
pub struct ScopedSampleAccess {
    fallback: SampleAccessConfig,
    overrides: HashMap<String, SampleAccessConfig>,
}

impl ScopedSampleAccess {
    pub fn new(fallback: SampleAccessConfig) -> ScopedSampleAccess {
        ScopedSampleAccess {
            fallback,
            overrides: HashMap::new(),
        }
    }

    pub fn set_scope_access(&mut self, scope_name: &str, access: SampleAccessConfig) {
        self.overrides.insert(scope_name.to_string(), access);
    }

    fn get_access(&self, scope: &dyn Scope) -> SampleAccessConfig {
        match self.overrides.get(scope.get_name()) {
            Some(access) => *access,
            None => self.fallback,
        }
    }
}

impl SampleAccessPolicy for ScopedSampleAccess {
    fn is_audio_allowed(&self, scope: &dyn Scope) -> bool {
        self.get_access(scope).audio_allowed
    }

    fn is_video_allowed(&self, scope: &dyn Scope) -> bool {
        self.get_access(scope).video_allowed
    }
}
