// Copyright (c) 2026, Garment Studio contributors
// SPDX-License-Identifier: BSD-3-Clause

//! Upload screen: import an existing design document and submit it for
//! review together with the requester's details.

use crate::io::export::LoadedDesign;
use crate::models::submission::UserInfo;

/// Requester form fields.
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub name: String,
    pub surname: String,
    pub address: String,
    pub message: String,
}

impl UploadForm {
    pub fn user_info(&self) -> UserInfo {
        let message = self.message.trim();
        UserInfo {
            name: self.name.trim().to_string(),
            surname: self.surname.trim().to_string(),
            address: self.address.trim().to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
        }
    }
}

/// Screen state held by the app across frames.
#[derive(Default)]
pub struct UploadState {
    pub form: UploadForm,
    pub file_name: Option<String>,
    pub error: Option<String>,
    pub content: Option<LoadedDesign>,
    pub submitting: bool,
}

pub enum UploadAction {
    None,
    Back,
    ChooseFile,
    Submit,
}

/// Check a submission before any store call is made.
pub fn validate_submission(form: &UploadForm, has_content: bool) -> Result<(), &'static str> {
    if !has_content {
        return Err("Please load a valid design file first.");
    }
    if form.name.trim().is_empty()
        || form.surname.trim().is_empty()
        || form.address.trim().is_empty()
    {
        return Err("Please fill in all required fields.");
    }
    Ok(())
}

/// Display the upload form.
pub fn show(ui: &mut egui::Ui, state: &mut UploadState) -> UploadAction {
    let mut action = UploadAction::None;

    if ui.button("< Back").clicked() {
        action = UploadAction::Back;
    }
    ui.add_space(8.0);
    ui.heading("Upload a Design");
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("Choose JSON file...").clicked() {
            action = UploadAction::ChooseFile;
        }
        match (&state.error, &state.file_name) {
            (Some(error), _) => {
                ui.colored_label(egui::Color32::from_rgb(211, 47, 47), error);
            }
            (None, Some(name)) if state.content.is_some() => {
                ui.colored_label(
                    egui::Color32::from_rgb(46, 125, 50),
                    format!("File loaded: {name}"),
                );
            }
            _ => {}
        }
    });
    ui.add_space(8.0);

    egui::Grid::new("upload-form").num_columns(2).show(ui, |ui| {
        ui.label("Name*");
        ui.text_edit_singleline(&mut state.form.name);
        ui.end_row();

        ui.label("Surname*");
        ui.text_edit_singleline(&mut state.form.surname);
        ui.end_row();

        ui.label("Address*");
        ui.text_edit_singleline(&mut state.form.address);
        ui.end_row();

        ui.label("Message");
        ui.text_edit_multiline(&mut state.form.message);
        ui.end_row();
    });
    ui.add_space(12.0);

    let label = if state.submitting {
        "Submitting..."
    } else {
        "Submit and View Design"
    };
    if ui
        .add_enabled(!state.submitting, egui::Button::new(label))
        .clicked()
    {
        action = UploadAction::Submit;
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> UploadForm {
        UploadForm {
            name: "Ada".to_string(),
            surname: "Lovelace".to_string(),
            address: "London".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn submission_requires_loaded_content() {
        assert!(validate_submission(&filled_form(), false).is_err());
        assert!(validate_submission(&filled_form(), true).is_ok());
    }

    #[test]
    fn empty_name_is_rejected_before_any_store_call() {
        let mut form = filled_form();
        form.name = "  ".to_string();
        assert!(validate_submission(&form, true).is_err());
    }

    #[test]
    fn all_required_fields_are_checked() {
        for field in ["name", "surname", "address"] {
            let mut form = filled_form();
            match field {
                "name" => form.name.clear(),
                "surname" => form.surname.clear(),
                _ => form.address.clear(),
            }
            assert!(validate_submission(&form, true).is_err(), "{field}");
        }
    }

    #[test]
    fn blank_message_becomes_none() {
        let mut form = filled_form();
        form.message = "  ".to_string();
        assert_eq!(form.user_info().message, None);

        form.message = "rush order".to_string();
        assert_eq!(form.user_info().message.as_deref(), Some("rush order"));
    }
}
