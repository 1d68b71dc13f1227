use super::*;
use cygen_config::BlankLineStyle;

use crate::frame::MAIN_FRAME_ID;

fn click(frame_id: u64, handle: &str, selector: &str) -> Block {
    Block::with_line(
        frame_id,
        ActionTag::Click,
        format!("{}.get('{}').click()", handle, selector),
    )
}

fn texts(blocks: &[Block]) -> Vec<&str> {
    blocks
        .iter()
        .flat_map(|b| b.lines().iter().map(|l| l.text()))
        .collect()
}

#[test]
fn test_inject_before_first_use() {
    let mut frames = FrameRegistry::new();
    frames.record(3, Some("https://embed.test/"));

    let blocks = vec![
        click(MAIN_FRAME_ID, "cy", "#a"),
        click(3, "frame_3", "#b"),
        click(3, "frame_3", "#c"),
    ];
    let out = inject_frame_declarations(blocks, &mut frames);

    assert_eq!(out.len(), 3);
    assert_eq!(
        texts(&out),
        vec![
            "cy.get('#a').click()",
            "let frames = await page.frames()",
            "const frame_3 = frames.find(f => f.url() === 'https://embed.test/')",
            "frame_3.get('#b').click()",
            "frame_3.get('#c').click()",
        ]
    );
    assert_eq!(out[1].lines()[0].kind(), Some(ActionTag::FrameSet));
    assert_eq!(out[1].lines()[1].frame_id(), Some(3));
    assert!(frames.is_empty());
}

#[test]
fn test_each_frame_declared_once() {
    let mut frames = FrameRegistry::new();
    frames.record(1, Some("https://one.test/"));
    frames.record(2, Some("https://two.test/"));

    let blocks = vec![
        click(2, "frame_2", "#x"),
        click(1, "frame_1", "#y"),
        click(2, "frame_2", "#z"),
        click(1, "frame_1", "#w"),
    ];
    let out = inject_frame_declarations(blocks, &mut frames);

    let lookups: Vec<&str> = texts(&out)
        .into_iter()
        .filter(|t| t.starts_with("const "))
        .collect();
    assert_eq!(
        lookups,
        vec![
            "const frame_2 = frames.find(f => f.url() === 'https://two.test/')",
            "const frame_1 = frames.find(f => f.url() === 'https://one.test/')",
        ]
    );
    assert_eq!(out[2].lines().len(), 1);
    assert_eq!(out[3].lines().len(), 1);
}

#[test]
fn test_unregistered_frame_not_declared() {
    let mut frames = FrameRegistry::new();
    let blocks = vec![click(4, "frame_4", "#q")];
    let out = inject_frame_declarations(blocks.clone(), &mut frames);
    assert_eq!(out, blocks);
}

#[test]
fn test_empty_blocks_are_skipped_by_injection() {
    let mut frames = FrameRegistry::new();
    frames.record(6, Some("https://six.test/"));

    let blocks = vec![Block::new(6), click(6, "frame_6", "#a")];
    let out = inject_frame_declarations(blocks, &mut frames);

    assert!(out[0].is_empty());
    assert_eq!(out[1].lines().len(), 3);
}

#[test]
fn test_insert_separators() {
    let blocks = vec![click(MAIN_FRAME_ID, "cy", "#a"), click(MAIN_FRAME_ID, "cy", "#b")];
    let out = insert_separators(blocks);

    assert_eq!(out.len(), 5);
    assert!(out[0].is_separator());
    assert!(!out[1].is_separator());
    assert!(out[2].is_separator());
    assert!(!out[3].is_separator());
    assert!(out[4].is_separator());
}

#[test]
fn test_insert_separators_empty() {
    assert!(insert_separators(Vec::new()).is_empty());
}

#[test]
fn test_run_respects_options() {
    let mut frames = FrameRegistry::new();
    frames.record(2, Some("https://f.test/"));
    let blocks = vec![click(2, "frame_2", "#a")];

    let options = GeneratorOptions {
        declare_frames: false,
        ..Default::default()
    };
    let out = PostProcessor::new(&options).run(blocks.clone(), frames.clone());
    assert_eq!(out, blocks);

    let options = GeneratorOptions {
        blank_line_style: BlankLineStyle::Separators,
        ..Default::default()
    };
    let out = PostProcessor::new(&options).run(blocks, frames);
    assert_eq!(out.len(), 3);
    assert_eq!(out[1].lines().len(), 3);
    assert!(out[0].is_separator() && out[2].is_separator());
}
