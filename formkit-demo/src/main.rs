mod sample;

use std::fs::File;

use chrono::NaiveDate;
use formkit::prelude::*;
use simplelog::{LevelFilter, WriteLogger};

fn load_config() -> Config {
    let Some(path) = std::env::args().nth(1) else {
        return Config::default();
    };
    match Config::load(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}: {}, using defaults", path, e);
            Config::default()
        }
    }
}

/// Plain-text calendar: title line, then weeks with `[..]` around the
/// selected days and `(..)` around range interiors.
fn calendar_text(doc: &Document, popup: &str) -> String {
    let title = doc
        .get(&format!("{popup}-title"))
        .map(|t| t.text_content())
        .unwrap_or_default();
    let mut out = format!("{title:^28}\n Su  Mo  Tu  We  Th  Fr  Sa\n");

    let Some(days) = doc.get(&format!("{popup}-days")) else {
        return out;
    };
    for (i, cell) in days.child_elements().iter().enumerate() {
        let text = cell.text_content();
        let label = if cell.has_class("empty") {
            "    ".to_string()
        } else if ["is-selected", "is-range-start", "is-range-end"]
            .iter()
            .any(|c| cell.has_class(c))
        {
            format!("[{:>2}]", text)
        } else if cell.has_class("is-in-range") {
            format!("({:>2})", text)
        } else {
            format!(" {:>2} ", text)
        };
        out.push_str(&label);
        if i % 7 == 6 {
            out.push('\n');
        }
    }
    out
}

fn day_button(doc: &Document, popup: &str, date: &str) -> Option<String> {
    doc.query_all_within(popup, &Selector::data("date"))
        .into_iter()
        .find(|b| b.get_data("date").map(String::as_str) == Some(date))
        .map(|b| b.id.clone())
}

fn value(doc: &Document, id: &str) -> String {
    doc.get(id).map(|el| el.value.clone()).unwrap_or_default()
}

fn main() {
    let log_file = File::create("formkit-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = load_config();
    let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap_or_default();

    let mut page = Page::new(sample::build(&config));
    let picker = DatePicker::new(config.date_picker.clone()).with_clock(FixedClock(today));
    let popup = picker.popup_id().to_string();
    page.mount(picker);
    page.mount(PasswordToggle::new());
    page.mount(UserLookup::new(config.lookup.clone()));
    page.mount(ChatAutosize::new(config.chat.clone()));
    page.mount(FileUploader::new(config.uploader.clone()));
    page.dispatch(Event::Load);

    // Range selection on the field near the bottom of the viewport.
    page.dispatch(Event::click(sample::PERIOD_INPUT));
    page.document_mut().set_rect(popup.as_str(), Rect::new(0, 0, 300, 320));
    page.animation_frame();
    if let Some(el) = page.document().get(&popup) {
        println!(
            "popup at top={:?} left={:?} above={}",
            el.top,
            el.left,
            el.has_class("is-top")
        );
    }
    for date in ["2024.06.10", "2024.06.20"] {
        if let Some(button) = day_button(page.document(), &popup, date) {
            page.dispatch(Event::click(button));
        }
        if page
            .document()
            .get(&popup)
            .map(|p| !p.hidden)
            .unwrap_or(false)
        {
            print!("{}", calendar_text(page.document(), &popup));
        }
    }
    println!(
        "period = {:?}",
        value(page.document(), sample::PERIOD_INPUT)
    );

    // Single date, seeded from the field's text.
    page.dispatch(Event::click(sample::BIRTH_INPUT));
    print!("{}", calendar_text(page.document(), &popup));
    page.press_key(Key::Escape);

    page.dispatch(Event::click(sample::PASSWORD_TOGGLE));
    println!(
        "password type = {:?}",
        page.document()
            .get("password")
            .and_then(|p| p.get_attr("type").cloned())
    );

    page.dispatch(Event::click(config.lookup.button_id.as_str()));
    let first = page
        .document()
        .query_within(&config.lookup.list_id, &Selector::class("suggestion-item"))
        .map(|item| item.id.clone());
    if let Some(first) = first {
        page.dispatch(Event::click(first));
    }
    println!(
        "lookup = {:?} / {:?}",
        value(page.document(), &config.lookup.input_id),
        value(page.document(), &config.lookup.name_output_id)
    );

    let chat_id = config.chat.textarea_id.clone();
    page.document_mut()
        .set_value(&chat_id, "A message long enough to wrap onto a second line of the box");
    page.dispatch(Event::Input {
        target: chat_id.clone(),
    });
    page.animation_frame();
    println!(
        "chat height = {:?}",
        page.document().get(&chat_id).and_then(|t| t.height)
    );

    page.dispatch(Event::Drop {
        target: sample::UPLOAD_DROP.to_string(),
        files: vec![
            FileRef::new("report.pdf", 1_536_000, 1_717_000_000_000),
            FileRef::new("notes.txt", 512, 1_717_000_000_000),
        ],
    });
    page.take_emitted();
    page.dispatch(Event::click(sample::UPLOAD_SUBMIT));
    for event in page.take_emitted() {
        if let Event::Custom { name, detail, .. } = event {
            println!("{} {}", name, detail);
        }
    }

    if let Some(list) = page
        .document()
        .query(&Selector::data("form-file-list"))
        .map(|l| l.child_elements().len())
    {
        println!("staged rows = {}", list);
    }
    log::debug!("[demo] done");
}
