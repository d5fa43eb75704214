use axum::extract::FromRef;
use fxhash::FxHashMap;
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use vapps_domain::config::SiteConfig;
use vapps_domain::registry::{FeatureSlice, InitializedSlice};

#[vapps_derive::site_error]
pub enum SiteStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("State missing feature slice{}: {message}", format_context(.context))]
    MissingSlice { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[derive(Debug)]
pub struct SiteStateInner {
    pub config: SiteConfig,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Immutable application state shared by every request handler.
#[derive(Debug, Clone)]
pub struct SiteState {
    inner: Arc<SiteStateInner>,
}

impl SiteState {
    #[must_use]
    pub fn builder() -> SiteStateBuilder {
        SiteStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner.slices.get(&TypeId::of::<T>()).and_then(InitializedSlice::downcast::<T>)
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, SiteStateError> {
        self.get_slice::<T>().ok_or_else(|| SiteStateError::MissingSlice {
            message: std::any::type_name::<T>().into(),
            context: None,
        })
    }

    /// Short names of the registered slices, sorted.
    #[must_use]
    pub fn slice_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.inner.slices.values().map(InitializedSlice::short_name).collect();
        names.sort_unstable();
        names
    }
}

impl Deref for SiteState {
    type Target = SiteStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<SiteState> for SiteConfig {
    fn from_ref(state: &SiteState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Debug, Default)]
pub struct SiteStateBuilder {
    config: Option<SiteConfig>,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl SiteStateBuilder {
    #[must_use]
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        self.slices.extend(slices.into_iter().map(|slice| (slice.id, slice)));
        self
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// Returns [`SiteStateError::Validation`] when no configuration was provided.
    pub fn build(self) -> Result<SiteState, SiteStateError> {
        let config = self.config.ok_or_else(|| SiteStateError::Validation {
            message: "SiteConfig not provided".into(),
            context: None,
        })?;

        Ok(SiteState { inner: Arc::new(SiteStateInner { config, slices: self.slices }) })
    }
}
