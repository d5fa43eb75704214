#![cfg(feature = "server")]

use vapps_kernel::domain::config::SiteConfig;
use vapps_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use vapps_kernel::server::state::{SiteState, SiteStateError};

#[derive(Debug)]
struct Probe(u8);

impl FeatureSlice for Probe {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

#[test]
fn build_requires_config() {
    let err = SiteState::builder().build().unwrap_err();
    assert!(matches!(err, SiteStateError::Validation { .. }));
}

#[test]
fn registered_slices_are_retrievable() {
    let state = SiteState::builder()
        .config(SiteConfig::default())
        .register_slice(InitializedSlice::new(Probe(7)))
        .build()
        .expect("state");

    assert_eq!(state.get_slice::<Probe>().map(|p| p.0), Some(7));
    assert_eq!(state.slice_names(), ["Probe"]);
}

#[test]
fn missing_slice_is_reported() {
    let state = SiteState::builder().config(SiteConfig::default()).build().expect("state");
    assert!(matches!(state.try_get_slice::<Probe>(), Err(SiteStateError::MissingSlice { .. })));
}
