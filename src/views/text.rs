//! Plain-text rendering of view render trees.

use std::fmt::Write;

use super::detail::{Block, SkeletonPart};
use super::list::{ListRender, Slot};

const PLACEHOLDER: &str = "░░░░░░░░░░░░";

/// Render the result grid. Cards are numbered in screen order so the
/// interactive session can open them by number.
pub fn list_to_text(render: &ListRender) -> String {
    let mut out = String::new();
    let mut n = 0usize;

    for region in &render.regions {
        let _ = writeln!(out, "== {} ==", region.media_type.label());
        for slot in &region.slots {
            match slot {
                Slot::Placeholder => {
                    let _ = writeln!(out, "  {PLACEHOLDER}");
                }
                Slot::Card(card) => {
                    n += 1;
                    let _ = write!(out, "  [{n}] {}", card.title);
                    if let Some(id) = &card.id {
                        let _ = write!(out, " ({id})");
                    }
                    out.push('\n');
                    if let Some(thumb) = &card.thumbnail_url {
                        let _ = writeln!(out, "      {thumb}");
                    }
                }
            }
        }
    }

    out
}

/// Render the detail view top to bottom.
pub fn detail_to_text(blocks: &[Block]) -> String {
    let mut out = String::new();

    for block in blocks {
        let _ = match block {
            Block::Skeleton(part) => writeln!(out, "{}", skeleton_row(*part)),
            Block::Title(title) => writeln!(out, "# {title}"),
            Block::Image { url, .. } => writeln!(out, "[image] {url}"),
            Block::Video { url, mime } => writeln!(out, "[video {mime}] {url}"),
            Block::Audio { url, mime } => writeln!(out, "[audio {mime}] {url}"),
            Block::MetadataToggle { expanded } => {
                writeln!(out, "{}", if *expanded { "Hide Metadata" } else { "Show Metadata" })
            }
            Block::Metadata {
                date_created,
                description,
            } => writeln!(
                out,
                "  Date Created: {}\n  {description}",
                date_created.as_deref().unwrap_or("")
            ),
            Block::Description(text) => writeln!(out, "{text}"),
            Block::AssetId(id) => writeln!(out, "Asset ID: {id}"),
            Block::Message(text) => writeln!(out, "{text}"),
            Block::ErrorNotice(text) => writeln!(out, "! {text}"),
        };
    }

    out
}

fn skeleton_row(part: SkeletonPart) -> &'static str {
    match part {
        SkeletonPart::Title => "░░░░░░░░░░░░░░░░",
        SkeletonPart::Media => "░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░",
        SkeletonPart::AudioControls => "░░░░░░░░░░░░░░░░░░░░",
        SkeletonPart::Metadata => "░░░░░░░░░░░░░░░░░░░░░░░░",
        SkeletonPart::AssetId => "░░░░░░░░",
    }
}
