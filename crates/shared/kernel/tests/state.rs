use chub_kernel::domain::config::ClientConfig;
use chub_kernel::domain::registry::InitializedSlice;
use chub_kernel::state::{ClientState, StateError};

#[chub_derive::chub_slice]
pub struct Probe {
    pub label: &'static str,
}

#[chub_derive::chub_slice]
pub struct Unregistered {}

#[test]
fn registered_slices_are_retrievable_by_type() {
    let state = ClientState::builder()
        .config(ClientConfig::default())
        .register_slice(InitializedSlice::new(Probe::new(ProbeInner { label: "probe" })))
        .build()
        .expect("state should build");

    let probe = state.get_slice::<Probe>().expect("probe slice registered");
    assert_eq!(probe.label, "probe");
    assert_eq!(state.slice_names().collect::<Vec<_>>(), vec!["Probe"]);

    let err = state.try_get_slice::<Unregistered>().expect_err("not registered");
    assert!(matches!(err, StateError::MissingSlice { .. }));
}

#[test]
fn building_without_config_fails() {
    let err = ClientState::builder().build().expect_err("config is mandatory");
    assert_eq!(err.kind(), "Validation");
}
