//! JUnit XML serialization.
//!
//! Writes the fixed tag structure:
//!
//! ```text
//! <testsuites>
//!   <testsuite name="..." package="..." time="N" tests="N" errors="N">
//!     <testcase name="..." classname="..." time="N">
//!       <failure message="..."/>
//!     </testcase>
//!   </testsuite>
//! </testsuites>
//! ```

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::string::FromUtf8Error;

use crate::report::{Case, Report, Suite};

/// Errors raised while serializing a report.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("serialized XML is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

const INDENT_SIZE: usize = 2;

impl Report {
    /// Serialize to an indented JUnit XML document.
    pub fn to_xml(&self) -> Result<String, WriteError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        writer.write_event(Event::Start(BytesStart::new("testsuites")))?;
        for suite in &self.suites {
            write_suite(&mut writer, suite)?;
        }
        writer.write_event(Event::End(BytesEnd::new("testsuites")))?;

        Ok(String::from_utf8(writer.into_inner())?)
    }
}

fn write_suite(writer: &mut Writer<Vec<u8>>, suite: &Suite) -> Result<(), WriteError> {
    let time = suite.time.to_string();
    let tests = suite.tests().to_string();
    let errors = suite.errors().to_string();

    let mut start = BytesStart::new("testsuite");
    start.push_attribute(("name", suite.name.as_str()));
    start.push_attribute(("package", suite.package.as_str()));
    start.push_attribute(("time", time.as_str()));
    start.push_attribute(("tests", tests.as_str()));
    start.push_attribute(("errors", errors.as_str()));

    if suite.cases().is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for case in suite.cases() {
        write_case(writer, case)?;
    }
    writer.write_event(Event::End(BytesEnd::new("testsuite")))?;
    Ok(())
}

fn write_case(writer: &mut Writer<Vec<u8>>, case: &Case) -> Result<(), WriteError> {
    let time = case.time.to_string();

    let mut start = BytesStart::new("testcase");
    start.push_attribute(("name", case.name.as_str()));
    start.push_attribute(("classname", case.classname.as_str()));
    start.push_attribute(("time", time.as_str()));

    match &case.failure {
        None => writer.write_event(Event::Empty(start))?,
        Some(failure) => {
            writer.write_event(Event::Start(start))?;
            let mut element = BytesStart::new("failure");
            element.push_attribute(("message", failure.message.as_str()));
            writer.write_event(Event::Empty(element))?;
            writer.write_event(Event::End(BytesEnd::new("testcase")))?;
        }
    }
    Ok(())
}
