use super::*;

#[test]
fn submit_label_reflects_progress() {
    assert_eq!(submit_label(false), "Sign Up");
    assert_eq!(submit_label(true), "Processing...");
}

#[test]
fn toggle_text_names_next_action() {
    assert_eq!(toggle_text(false), "Show");
    assert_eq!(toggle_text(true), "Hide");
}

#[test]
fn signal_form_edits_the_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(SignupForm::new());
        let slot = SignalForm(form);
        assert_eq!(slot.with_form(|f| f.set_email("ada@example.com")), Some(()));
        assert_eq!(form.get_untracked().email, "ada@example.com");
    });
}

#[test]
fn signal_form_is_gone_after_dispose() {
    let owner = Owner::new();
    owner.with(|| {
        let form = RwSignal::new(SignupForm::new());
        form.dispose();
        assert_eq!(SignalForm(form).with_form(|f| f.accept_terms), None);
    });
}
