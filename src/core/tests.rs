#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use crate::core::chat::{CHAT_REPLY_DELAY_MS, DEFAULT_REPLY, GREETING, QUICK_QUESTIONS};
    use crate::core::contact::CONTACT_SUBMIT_DELAY_MS;
    use crate::core::upload::testing::{CountingPreviews, FakeFile};
    use crate::core::upload::admit;
    use crate::core::{
        ChatSession, ContactBackend, ContactField, ContactFormState, ContactSubmission,
        FieldError, FormPhase, HeldFile, IntakeError, LicenseIntake, LicenseType,
        ManualScheduler, MatchMode, Reveal, ResponseTable, Scheduler, SubmitError,
        UploadBackend, validate,
    };

    const MB: u64 = 1024 * 1024;

    /// Records every handoff instead of logging it
    #[derive(Default)]
    struct RecordingBackend {
        contacts: RefCell<Vec<ContactSubmission>>,
        uploads: RefCell<Vec<Vec<String>>>,
    }

    impl ContactBackend for RecordingBackend {
        fn hand_off(&self, submission: &ContactSubmission) {
            self.contacts.borrow_mut().push(submission.clone());
        }
    }

    impl UploadBackend for RecordingBackend {
        fn hand_off(&self, files: &[HeldFile]) {
            self.uploads
                .borrow_mut()
                .push(files.iter().map(|f| f.name.clone()).collect());
        }
    }

    fn complete_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Michael Chen".to_string(),
            email: "m.chen@horizon.example".to_string(),
            company: "Horizon Financial".to_string(),
            license_type: Some(LicenseType::MicrosoftOffice),
            message: "We migrated to the cloud and have spare seats.".to_string(),
        }
    }

    /// Submit the way the contact section does: validate, hand off, then
    /// finish after the simulated latency.
    fn submit_form(
        form: &Rc<RefCell<ContactFormState>>,
        scheduler: &ManualScheduler,
        backend: &RecordingBackend,
    ) -> Result<(), SubmitError> {
        let submission = form.borrow_mut().submit()?;
        ContactBackend::hand_off(backend, &submission);

        let form = form.clone();
        scheduler.schedule(
            Duration::from_millis(CONTACT_SUBMIT_DELAY_MS as u64),
            Box::new(move || form.borrow_mut().complete()),
        );
        Ok(())
    }

    // ========================================================================
    // Contact form
    // ========================================================================

    #[test]
    fn test_empty_form_reports_all_five_errors() {
        let errors = validate(&ContactSubmission::default());
        let messages: Vec<String> = ContactField::ALL
            .iter()
            .filter_map(|f| errors.message(*f))
            .collect();

        assert_eq!(
            messages,
            vec![
                "Name is required",
                "Email is required",
                "Company is required",
                "Please select a license type",
                "Message is required",
            ]
        );
    }

    #[test]
    fn test_malformed_email_is_the_only_error() {
        let submission = ContactSubmission {
            email: "not-an-email".to_string(),
            ..complete_submission()
        };
        let errors = validate(&submission);

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(ContactField::Email),
            Some(FieldError::EmailInvalid)
        );
    }

    #[test]
    fn test_contact_submit_waits_for_latency() {
        let scheduler = ManualScheduler::new();
        let backend = RecordingBackend::default();
        let form = Rc::new(RefCell::new(ContactFormState {
            submission: complete_submission(),
            ..Default::default()
        }));

        submit_form(&form, &scheduler, &backend).unwrap();
        assert_eq!(form.borrow().phase, FormPhase::Submitting);
        assert_eq!(backend.contacts.borrow().len(), 1);

        // Pressing submit again while pending does nothing
        assert_eq!(
            submit_form(&form, &scheduler, &backend),
            Err(SubmitError::InFlight)
        );
        assert_eq!(scheduler.pending_count(), 1);
        assert_eq!(backend.contacts.borrow().len(), 1);

        scheduler.run_pending();
        assert_eq!(form.borrow().phase, FormPhase::Submitted);
        assert_eq!(form.borrow().submission, ContactSubmission::default());

        form.borrow_mut().start_over();
        assert_eq!(form.borrow().phase, FormPhase::Editing);
        assert!(form.borrow().errors.is_empty());
    }

    #[test]
    fn test_invalid_form_is_never_handed_off() {
        let scheduler = ManualScheduler::new();
        let backend = RecordingBackend::default();
        let form = Rc::new(RefCell::new(ContactFormState::new()));

        assert_eq!(
            submit_form(&form, &scheduler, &backend),
            Err(SubmitError::Invalid(5))
        );
        assert_eq!(scheduler.pending_count(), 0);
        assert!(backend.contacts.borrow().is_empty());
    }

    #[test]
    fn test_fixing_fields_one_by_one() {
        let mut form = ContactFormState::new();
        let _ = form.submit();
        assert_eq!(form.errors.len(), 5);

        let filled = complete_submission();
        for (i, field) in ContactField::ALL.iter().enumerate() {
            form.edit(*field, filled.value(*field));
            assert_eq!(form.errors.len(), 4 - i);
            assert!(form.errors.get(*field).is_none());
        }

        assert!(form.submit().is_ok());
    }

    // ========================================================================
    // License intake
    // ========================================================================

    #[test]
    fn test_upload_scenarios() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        assert_eq!(
            intake.accept(&[FakeFile::new("readme.exe", 100)], &previews),
            Err(IntakeError::UnsupportedType)
        );
        assert_eq!(
            intake.error().map(|e| e.to_string()).as_deref(),
            Some("Please upload only PDF, TXT, DOC, or DOCX files.")
        );
        assert!(intake.files().is_empty());

        assert_eq!(
            intake.accept(&[FakeFile::new("a.pdf", 6 * MB)], &previews),
            Err(IntakeError::TooLarge)
        );
        assert!(intake.files().is_empty());

        assert_eq!(
            intake.accept(&[FakeFile::new("a.pdf", MB)], &previews),
            Ok(1)
        );
        assert!(intake.error().is_none());
        assert_eq!(intake.files().len(), 1);
    }

    #[test]
    fn test_removal_does_not_restore_previous_error() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        intake.accept(&[FakeFile::new("a.pdf", MB)], &previews).unwrap();
        let _ = intake.accept(&[FakeFile::new("b.exe", MB)], &previews);
        assert!(intake.error().is_some());

        intake.accept(&[FakeFile::new("c.txt", MB)], &previews).unwrap();
        let id = intake.files()[0].id;
        intake.remove::<FakeFile, _>(id, &previews);

        assert!(intake.files().is_empty());
        assert!(intake.error().is_none());
    }

    #[test]
    fn test_preview_handles_balance_over_a_session() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        for name in ["a.pdf", "b.doc", "c.docx", "d.txt"] {
            intake.accept(&[FakeFile::new(name, MB)], &previews).unwrap();
            assert_eq!(previews.live(), 1);
        }

        let id = intake.files()[0].id;
        intake.remove::<FakeFile, _>(id, &previews);
        intake.accept(&[FakeFile::new("e.pdf", MB)], &previews).unwrap();

        // Component teardown
        intake.release::<FakeFile, _>(&previews);

        assert_eq!(previews.live(), 0);
        assert_eq!(
            previews.created.borrow().len(),
            previews.revoked.borrow().len()
        );
    }

    #[test]
    fn test_multi_file_drop_is_refused_before_validation() {
        let previews = CountingPreviews::default();
        let mut intake = LicenseIntake::new();

        intake.accept(&[FakeFile::new("keep.pdf", MB)], &previews).unwrap();
        let _ = intake.accept(&[FakeFile::new("bad.exe", MB)], &previews);

        let dropped = admit(vec![
            FakeFile::new("a.pdf", MB),
            FakeFile::new("b.pdf", MB),
        ]);
        assert_eq!(intake.accept(&dropped, &previews), Ok(0));

        assert!(intake.error().is_none());
        assert_eq!(intake.files()[0].name, "keep.pdf");
    }

    #[test]
    fn test_submit_for_review_hands_off_held_files() {
        let previews = CountingPreviews::default();
        let backend = RecordingBackend::default();
        let mut intake = LicenseIntake::new();
        assert!(!intake.can_submit());

        intake
            .accept(&[FakeFile::new("office.pdf", 2 * MB)], &previews)
            .unwrap();
        assert!(intake.can_submit());

        UploadBackend::hand_off(&backend, intake.files());
        assert_eq!(*backend.uploads.borrow(), vec![vec!["office.pdf".to_string()]]);
    }

    // ========================================================================
    // Chat
    // ========================================================================

    #[test]
    fn test_both_match_modes_reach_the_selling_answer() {
        let table = ResponseTable::default();
        let exact = table.respond("How do I sell my license?", MatchMode::Exact);
        let substring = table.respond(
            "tell me how do i sell my license please",
            MatchMode::Substring,
        );

        assert_eq!(exact, substring);
        assert_ne!(exact, DEFAULT_REPLY);
        assert_eq!(
            table.respond("what's the weather", MatchMode::Substring),
            DEFAULT_REPLY
        );
    }

    #[test]
    fn test_chat_reply_arrives_after_delay() {
        let scheduler = ManualScheduler::new();
        let table = ResponseTable::default();
        let chat = Rc::new(RefCell::new(ChatSession::new()));
        chat.borrow_mut().open();

        let pending = chat.borrow_mut().ask_quick(QUICK_QUESTIONS[3]);
        let session = chat.clone();
        scheduler.schedule(
            Duration::from_millis(CHAT_REPLY_DELAY_MS as u64),
            Box::new(move || session.borrow_mut().deliver(&pending, &table)),
        );

        assert_eq!(chat.borrow().transcript().len(), 2);
        assert!(chat.borrow().is_awaiting_reply());

        scheduler.run_pending();
        let chat = chat.borrow();
        assert_eq!(chat.transcript().len(), 3);
        assert!(chat.transcript()[2].is_bot);
        assert!(!chat.is_awaiting_reply());
    }

    #[test]
    fn test_reopening_keeps_single_greeting() {
        let mut chat = ChatSession::new();
        for _ in 0..3 {
            chat.open();
            chat.close();
        }
        chat.open();

        let greetings = chat
            .transcript()
            .iter()
            .filter(|m| m.is_bot && m.text == GREETING)
            .count();
        assert_eq!(greetings, 1);
    }

    #[test]
    fn test_quick_questions_hide_after_first_exchange() {
        let table = ResponseTable::default();
        let mut chat = ChatSession::new();
        chat.open();
        assert!(chat.shows_quick_questions());

        let pending = chat.submit_text("hello").unwrap();
        chat.deliver(&pending, &table);
        assert!(!chat.shows_quick_questions());
        assert_eq!(chat.transcript()[2].text, DEFAULT_REPLY);
    }

    // ========================================================================
    // Scroll reveal
    // ========================================================================

    #[test]
    fn test_sections_reveal_independently() {
        let mut steps = Reveal::default();
        let mut testimonials = Reveal::default();

        steps.observe(true, 0.4);
        assert!(steps.is_visible());
        assert!(!testimonials.is_visible());

        testimonials.observe(false, 0.0);
        steps.observe(false, 0.0);
        assert!(steps.is_visible());
        assert!(!testimonials.is_visible());
    }
}
