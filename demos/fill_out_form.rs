use lssr_form::{
    error::Result,
    export::DirectorySink,
    form::{Dialog, Form},
    models::field::{Field, Section},
};

/// Walk through one editing session: show the layout, make some edits, trip
/// the validation dialog, fix things up, and export into the temp directory.
fn example() -> Result<()> {
    let mut form = Form::default();

    for section in Section::ALL {
        let marker = if section.is_required() { " *" } else { "" };
        println!("== {}{}", section.title(), marker);
        if let Some(hint) = section.hint() {
            println!("   ({})", hint);
        }
        for field in section.fields() {
            let marker = if field.is_required() { " *" } else { "" };
            println!("   {}{} [{:?}]", field.label(), marker, field.kind());
        }
    }

    form.set(Field::First, "Sammy");
    form.set(Field::Last, "Slug");
    form.set(Field::Email, "sammy@ucsc.edu");
    form.set(Field::Mailcode, "1234");
    form.set(Field::HiringUnit, "Library");
    form.set(Field::JobTitle, "Student Assistant");
    form.set(Field::JobNumber, "55O1");

    // picking one category fills in the rest
    let changes = form.set(Field::UcscStudent, "Yes");
    for change in changes.iter() {
        println!("{} -> {:?} ({:?})", change.field(), change.to(), change.origin());
    }

    // no representative, so phone and email get filled in too
    form.set_key("repTimekeeperName", "n/a")?;

    if form.validate()? == Dialog::ShowingErrors {
        println!("Please fix the following issues:");
        for msg in form.error_messages() {
            println!("  * {}", msg);
        }
    }
    form.dismiss();

    form.set(Field::JobNumber, "5501");
    form.set(Field::ManagerEmail, "pat@ucsc.edu");
    form.set(Field::FbiBackground, "No");
    form.set(Field::ReclassDuties, "No");

    let mut sink = DirectorySink::new(std::env::temp_dir());
    form.export(&mut sink)?;
    println!("Form saved to {}", sink.dir().join(form.config().export_filename()).display());
    Ok(())
}

fn main() {
    if let Err(e) = example() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
