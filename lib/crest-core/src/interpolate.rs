//! Filling path templates with scalar arguments.

use std::collections::VecDeque;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{Arg, PathTemplate, Segment};

/// Characters escaped inside a path segment.
///
/// Unreserved characters pass through; anything that would split the
/// segment or start a query/fragment is encoded.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// Percent-encode a single path segment.
#[must_use]
pub fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string()
}

/// Substitute path arguments into a template.
///
/// Slots consume arguments front to back. A slot with no argument left
/// collapses; an [`Arg::Absent`] consumes its slot and emits nothing.
/// Arguments left over once the template is exhausted are appended as
/// extra segments, in order.
///
/// The result has no leading `/`.
///
/// ```
/// use crest_core::{PathTemplate, args, interpolate};
///
/// let template = PathTemplate::new("companies/${}/customers-stats");
/// assert_eq!(
///     interpolate(&template, args![134, 15]),
///     "companies/134/customers-stats/15"
/// );
/// ```
#[must_use]
pub fn interpolate(template: &PathTemplate, path_args: impl IntoIterator<Item = Arg>) -> String {
    let mut queue: VecDeque<Arg> = path_args.into_iter().collect();
    let mut segments: Vec<String> = Vec::new();

    for segment in template.segments() {
        match segment {
            Segment::Literal(text) => segments.push(text.to_string()),
            Segment::Slot => {
                if let Some(value) = queue.pop_front().and_then(|arg| arg.to_path_value()) {
                    segments.push(encode_path_segment(&value));
                }
            }
        }
    }

    segments.extend(
        queue
            .into_iter()
            .filter_map(|arg| arg.to_path_value())
            .map(|value| encode_path_segment(&value)),
    );

    segments.join("/")
}
