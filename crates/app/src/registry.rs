//! Capability registry.
//!
//! An [`ApiRef`] names a capability, an [`ApiFactory`] says how to build it,
//! and [`ApiRegistry`] holds the single instance built for each capability.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::error::{AppError, Result};

/// Typed handle to a capability identifier.
pub struct ApiRef<T: ?Sized> {
    id: &'static str,
    _marker: PhantomData<fn() -> Arc<T>>,
}

impl<T: ?Sized> ApiRef<T> {
    pub const fn new(id: &'static str) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }
}

impl<T: ?Sized> fmt::Debug for ApiRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiRef({})", self.id)
    }
}

type BuildFn = Box<dyn FnOnce() -> Box<dyn Any + Send + Sync> + Send>;

/// Zero-argument constructor bound to a capability identifier.
pub struct ApiFactory {
    id: &'static str,
    build: BuildFn,
}

impl ApiFactory {
    pub fn new<T, F>(api: &ApiRef<T>, factory: F) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
        F: FnOnce() -> Arc<T> + Send + 'static,
    {
        Self {
            id: api.id(),
            build: Box::new(move || Box::new(factory()) as Box<dyn Any + Send + Sync>),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }
}

impl fmt::Debug for ApiFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiFactory").field("id", &self.id).finish()
    }
}

/// Instances built from a registration table, one per capability.
#[derive(Default)]
pub struct ApiRegistry {
    instances: HashMap<&'static str, Box<dyn Any + Send + Sync>>,
    order: Vec<&'static str>,
}

impl ApiRegistry {
    /// Invokes every factory once, in table order. A capability may only be
    /// registered once.
    pub fn from_factories(factories: impl IntoIterator<Item = ApiFactory>) -> Result<Self> {
        let mut registry = Self::default();
        for factory in factories {
            if registry.instances.contains_key(factory.id) {
                return Err(AppError::Registry(format!(
                    "capability {} registered more than once",
                    factory.id
                )));
            }
            tracing::debug!(api = factory.id, "instantiating api");
            let instance = (factory.build)();
            registry.instances.insert(factory.id, instance);
            registry.order.push(factory.id);
        }
        Ok(registry)
    }

    pub fn get<T>(&self, api: &ApiRef<T>) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.instances
            .get(api.id())
            .and_then(|instance| instance.downcast_ref::<Arc<T>>())
            .cloned()
    }

    pub fn require<T>(&self, api: &ApiRef<T>) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.get(api)
            .ok_or_else(|| AppError::NotFound(format!("no implementation registered for {}", api.id())))
    }

    /// Registered capability ids in registration order.
    pub fn ids(&self) -> &[&'static str] {
        &self.order
    }
}

impl fmt::Debug for ApiRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRegistry").field("ids", &self.order).finish()
    }
}
