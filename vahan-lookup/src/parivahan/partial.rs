//! JSF partial-response reader.
//!
//! The search POST is answered with an XML document rather than a page:
//!
//! ```text
//! <partial-response>
//!   <changes>
//!     <update id="form_rcdl:pnl_show"><![CDATA[ ...html... ]]></update>
//!     <update id="j_id1:javax.faces.ViewState:0"><![CDATA[ ...token... ]]></update>
//!   </changes>
//! </partial-response>
//! ```
//!
//! or, when the server side fails, an `<error>` element with an
//! `<error-name>` and `<error-message>`.

use quick_xml::Reader;
use quick_xml::events::Event;

/// Errors while reading a lookup response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The partial response is not well-formed XML
    #[error("malformed partial response: {0}")]
    Xml(String),

    /// The server answered with a JSF error instead of updates
    #[error("server reported {name}: {message}")]
    Server { name: String, message: String },
}

/// Which text-bearing element the reader is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Other,
    Update,
    ErrorName,
    ErrorMessage,
}

/// Whether `body` is a JSF partial response rather than an HTML page.
///
/// Decided by the root element: XHTML pages also open with an XML
/// declaration. Anything that does not read as XML up to its first element
/// is treated as HTML.
pub fn is_partial_response(body: &str) -> bool {
    let mut reader = Reader::from_str(body.trim_start_matches('\u{feff}'));

    loop {
        match reader.read_event() {
            Ok(Event::Start(e) | Event::Empty(e)) => {
                return e.local_name().as_ref() == b"partial-response";
            }
            Ok(Event::Decl(_) | Event::Comment(_) | Event::DocType(_) | Event::PI(_)) => {}
            Ok(Event::Text(text)) if text.iter().all(u8::is_ascii_whitespace) => {}
            _ => return false,
        }
    }
}

/// Call `visit` with the markup carried by each `<update>`, in document order.
///
/// Updates before a malformed part of the document are visited before the
/// error is returned.
pub fn for_each_update<F>(xml: &str, mut visit: F) -> Result<(), ParseError>
where
    F: FnMut(&str),
{
    let mut reader = Reader::from_str(xml);
    let mut section = Section::Other;
    let mut buf = String::new();
    let mut error_name = String::new();
    let mut error_message = String::new();
    let mut in_error = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ParseError::Xml(e.to_string()))?;

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"update" => {
                    section = Section::Update;
                    buf.clear();
                }
                b"error" => in_error = true,
                b"error-name" if in_error => section = Section::ErrorName,
                b"error-message" if in_error => section = Section::ErrorMessage,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"update" => {
                    visit(&buf);
                    section = Section::Other;
                }
                b"error" => {
                    return Err(ParseError::Server {
                        name: error_name.trim().to_string(),
                        message: error_message.trim().to_string(),
                    });
                }
                b"error-name" | b"error-message" => section = Section::Other,
                _ => {}
            },
            Event::CData(data) => {
                let text = String::from_utf8_lossy(&data);
                push_text(section, &text, &mut buf, &mut error_name, &mut error_message);
            }
            Event::Text(data) => {
                let text = data
                    .unescape()
                    .map_err(|e| ParseError::Xml(e.to_string()))?;
                push_text(section, &text, &mut buf, &mut error_name, &mut error_message);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(())
}

fn push_text(
    section: Section,
    text: &str,
    update: &mut String,
    error_name: &mut String,
    error_message: &mut String,
) {
    match section {
        Section::Update => update.push_str(text),
        Section::ErrorName => error_name.push_str(text),
        Section::ErrorMessage => error_message.push_str(text),
        Section::Other => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn updates(xml: &str) -> (Vec<String>, Result<(), ParseError>) {
        let mut seen = Vec::new();
        let result = for_each_update(xml, |fragment| seen.push(fragment.to_string()));
        (seen, result)
    }

    #[test]
    fn detects_partial_responses() {
        assert!(is_partial_response(
            "<?xml version='1.0' encoding='UTF-8'?><partial-response/>"
        ));
        assert!(is_partial_response("\n  <partial-response></partial-response>"));
        assert!(!is_partial_response("<html><body></body></html>"));
        assert!(!is_partial_response("<!DOCTYPE html><html></html>"));
        assert!(!is_partial_response(""));
    }

    #[test]
    fn xml_declaration_alone_is_not_enough() {
        let xhtml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <!DOCTYPE html>
            <html xmlns="http://www.w3.org/1999/xhtml"><body></body></html>"#;
        assert!(!is_partial_response(xhtml));

        // Comments and whitespace before the root are skipped
        assert!(is_partial_response(
            "<?xml version='1.0'?>\n<!-- generated -->\n<partial-response><changes/></partial-response>"
        ));
    }

    #[test]
    fn byte_order_mark_is_skipped() {
        assert!(is_partial_response(
            "\u{feff}<?xml version='1.0' encoding='UTF-8'?><partial-response/>"
        ));
        assert!(!is_partial_response("\u{feff}<!DOCTYPE html><html></html>"));
    }

    #[test]
    fn text_before_root_is_html() {
        assert!(!is_partial_response("Service unavailable <partial-response/>"));
        assert!(!is_partial_response("<p>&nbsp;</p>"));
    }

    #[test]
    fn visits_cdata_updates_in_order() {
        let xml = r#"<?xml version='1.0' encoding='UTF-8'?>
            <partial-response id="j_id1"><changes>
              <update id="form_rcdl:pnl_show"><![CDATA[<table class="table"></table>]]></update>
              <update id="j_id1:javax.faces.ViewState:0"><![CDATA[-42:17]]></update>
            </changes></partial-response>"#;

        let (seen, result) = updates(xml);
        assert!(result.is_ok());
        assert_eq!(seen, vec![r#"<table class="table"></table>"#, "-42:17"]);
    }

    #[test]
    fn unescapes_text_updates() {
        let xml = r#"<partial-response><changes>
              <update id="a">&lt;td&gt;Fuel Type&lt;/td&gt;</update>
            </changes></partial-response>"#;

        let (seen, result) = updates(xml);
        assert!(result.is_ok());
        assert_eq!(seen, vec!["<td>Fuel Type</td>"]);
    }

    #[test]
    fn server_error_is_reported() {
        let xml = r#"<partial-response><error>
              <error-name>class javax.faces.application.ViewExpiredException</error-name>
              <error-message><![CDATA[viewId:/vahan/rcDlHome.xhtml - View could not be restored.]]></error-message>
            </error></partial-response>"#;

        let (seen, result) = updates(xml);
        assert!(seen.is_empty());
        assert_eq!(
            result,
            Err(ParseError::Server {
                name: "class javax.faces.application.ViewExpiredException".into(),
                message: "viewId:/vahan/rcDlHome.xhtml - View could not be restored.".into(),
            })
        );
    }

    #[test]
    fn malformed_document_after_update() {
        let xml = r#"<partial-response><changes>
              <update id="a"><![CDATA[first]]></update>
              <update id="b"></wrong>
            </changes></partial-response>"#;

        let (seen, result) = updates(xml);
        assert_eq!(seen, vec!["first"]);
        assert!(matches!(result, Err(ParseError::Xml(_))));
    }

    #[test]
    fn error_display() {
        let err = ParseError::Xml("unexpected end".into());
        assert_eq!(err.to_string(), "malformed partial response: unexpected end");

        let err = ParseError::Server {
            name: "ViewExpiredException".into(),
            message: "View could not be restored.".into(),
        };
        assert_eq!(
            err.to_string(),
            "server reported ViewExpiredException: View could not be restored."
        );
    }
}
