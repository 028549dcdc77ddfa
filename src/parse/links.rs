//! Link extraction over a parsed document tree.
//!
//! One depth-first pass over the tree, driven by open/close edges rather than
//! recursion, so document depth never touches the call stack. Every open
//! element gets a frame that collects its subtree (raw text, images, nested
//! mail-link addresses); on close the frame is folded into its parent, so an
//! anchor reads its own record straight off the frame instead of walking its
//! subtree again. Anchors reserve their output slot when opened, which keeps
//! records in document pre-order even though they are filled in on close.

use ego_tree::iter::Edge;
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node};

use crate::config::{ALT_ATTR, ANCHOR_TAG, HREF_ATTR, IMAGE_TAG, MAILTO_PREFIX, SRC_ATTR};
use crate::models::{ImageRef, LinkRecord};

use super::email::find_emails;

/// The node kinds the extractor distinguishes.
enum NodeKind<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
    /// Comments, doctypes, processing instructions
    Other,
}

impl<'a> NodeKind<'a> {
    fn of(node: NodeRef<'a, Node>) -> Self {
        match node.value() {
            Node::Text(text) => NodeKind::Text(&**text),
            Node::Element(_) => ElementRef::wrap(node).map_or(NodeKind::Other, NodeKind::Element),
            _ => NodeKind::Other,
        }
    }
}

fn is_anchor(element: ElementRef<'_>) -> bool {
    element.value().name() == ANCHOR_TAG
}

fn is_image(element: ElementRef<'_>) -> bool {
    element.value().name() == IMAGE_TAG
}

fn attr_or_empty(element: ElementRef<'_>, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().to_string()
}

/// Address of a `mailto:` anchor, with the scheme prefix stripped.
fn mail_link_address(anchor: ElementRef<'_>) -> Option<String> {
    anchor
        .value()
        .attr(HREF_ATTR)
        .and_then(|href| href.strip_prefix(MAILTO_PREFIX))
        .map(str::to_string)
}

/// Accumulated content of one subtree.
#[derive(Default)]
struct Harvest {
    text: String,
    images: Vec<ImageRef>,
    /// `mailto:` addresses of anchors inside the subtree, document order
    mail_links: Vec<String>,
}

impl Harvest {
    fn absorb(&mut self, child: Harvest) {
        self.text.push_str(&child.text);
        self.images.extend(child.images);
        self.mail_links.extend(child.mail_links);
    }
}

/// An element that has been opened but not yet closed.
struct Frame {
    /// Output slot, for anchors only
    slot: Option<usize>,
    acc: Harvest,
}

fn open_element(element: ElementRef<'_>, records: &mut Vec<LinkRecord>) -> Frame {
    let slot = is_anchor(element).then(|| {
        records.push(LinkRecord::default());
        records.len() - 1
    });

    let mut acc = Harvest::default();
    if is_image(element) {
        acc.images.push(ImageRef {
            src: attr_or_empty(element, SRC_ATTR),
            alt: attr_or_empty(element, ALT_ATTR),
        });
    }

    Frame { slot, acc }
}

fn close_element(element: ElementRef<'_>, frame: Frame, records: &mut [LinkRecord]) -> Harvest {
    let Frame { slot, mut acc } = frame;

    if let Some(slot) = slot {
        let own_mail_link = mail_link_address(element);
        let text = acc.text.trim().to_string();

        // Own mail-link first, then text matches, then nested mail-links
        let mut emails: Vec<String> = own_mail_link.iter().cloned().collect();
        emails.extend(find_emails(&text));
        emails.extend(acc.mail_links.iter().cloned());

        records[slot] = LinkRecord {
            target: attr_or_empty(element, HREF_ATTR),
            text,
            images: acc.images.clone(),
            emails,
        };

        if let Some(address) = own_mail_link {
            acc.mail_links.insert(0, address);
        }
    }

    acc
}

/// Extracts one `LinkRecord` per anchor element under (and including) `root`.
///
/// Records are returned in document pre-order. Every anchor yields a record,
/// even one with no href, text, images or emails; dropping empty records is
/// left to the caller. Never fails: missing attributes become empty strings.
pub fn extract_links(root: ElementRef<'_>) -> Vec<LinkRecord> {
    let mut records = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for edge in root.traverse() {
        match edge {
            Edge::Open(node) => match NodeKind::of(node) {
                NodeKind::Element(element) => stack.push(open_element(element, &mut records)),
                NodeKind::Text(text) => {
                    if let Some(frame) = stack.last_mut() {
                        frame.acc.text.push_str(text);
                    }
                }
                NodeKind::Other => {}
            },
            Edge::Close(node) => {
                let NodeKind::Element(element) = NodeKind::of(node) else {
                    continue;
                };
                let Some(frame) = stack.pop() else {
                    continue;
                };
                let acc = close_element(element, frame, &mut records);
                if let Some(parent) = stack.last_mut() {
                    parent.acc.absorb(acc);
                }
            }
        }
    }

    records
}

/// Extracts link records from a whole parsed document.
pub fn extract_document_links(document: &Html) -> Vec<LinkRecord> {
    let records = extract_links(document.root_element());
    log::debug!("Extracted {} anchor records", records.len());
    records
}
