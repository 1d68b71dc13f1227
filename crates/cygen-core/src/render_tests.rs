use super::*;
use cygen_config::BlankLineStyle;
use cygen_protocols::ActionTag;

use crate::frame::MAIN_FRAME_ID;
use crate::postprocess::insert_separators;

fn click(selector: &str) -> Block {
    Block::with_line(
        MAIN_FRAME_ID,
        ActionTag::Click,
        format!("cy.get('{}').click()", selector),
    )
}

fn options(wrap_describe: bool, blank_lines: bool) -> GeneratorOptions {
    GeneratorOptions {
        wrap_describe,
        blank_lines_between_blocks: blank_lines,
        ..Default::default()
    }
}

#[test]
fn test_skeleton_with_defaults() {
    let opts = GeneratorOptions::default();
    let out = Renderer::new(&opts).render(&[], &[]);
    assert_eq!(
        out,
        "describe('test_name', function() {\n\n  it('what_it_does', function() {\n\n  })\n\n})\n"
    );
}

#[test]
fn test_skeleton_without_wrapper_or_spacing() {
    let opts = options(false, false);
    let out = Renderer::new(&opts).render(&[], &[]);
    assert_eq!(out, "  it('what_it_does', function() {\n\n  })\n");
}

#[test]
fn test_body_joined_blank_lines() {
    let opts = GeneratorOptions::default();
    let out = Renderer::new(&opts).render(&[click("#a"), click("#b")], &[]);
    assert_eq!(
        out,
        "describe('test_name', function() {\n\n  it('what_it_does', function() {\n\n    cy.get('#a').click()\n \n    cy.get('#b').click()\n \n  })\n\n})\n"
    );
}

#[test]
fn test_body_without_wrapper_uses_three_space_indent() {
    let opts = options(false, false);
    let out = Renderer::new(&opts).render(&[click("#submit")], &[]);
    assert_eq!(
        out,
        "  it('what_it_does', function() {\n\n   cy.get('#submit').click()\n  })\n"
    );
}

#[test]
fn test_setup_section() {
    let opts = options(true, false);
    let setup = vec![
        Block::with_line(MAIN_FRAME_ID, ActionTag::Cookie, "cy.clearCookies()"),
        Block::with_line(MAIN_FRAME_ID, ActionTag::Cookie, "cy.setCookie('a', '1', {})"),
    ];
    let out = Renderer::new(&opts).render(&[], &setup);
    assert_eq!(
        out,
        "describe('test_name', function() {\n  beforeEach(() => {\n    cy.clearCookies()\n    cy.setCookie('a', '1', {})\n  })\n\n  it('what_it_does', function() {\n\n  })\n})"
    );
}

#[test]
fn test_setup_lines_are_not_spaced() {
    let opts = GeneratorOptions::default();
    let setup = vec![Block::with_line(MAIN_FRAME_ID, ActionTag::Cookie, "cy.clearCookies()")];
    let section = Renderer::new(&opts).render_setup(&setup);
    assert_eq!(section, "  beforeEach(() => {\n    cy.clearCookies()\n  })\n\n");
}

#[test]
fn test_empty_setup_renders_nothing() {
    let opts = GeneratorOptions::default();
    assert!(Renderer::new(&opts).render_setup(&[]).is_empty());
}

#[test]
fn test_separator_style() {
    let opts = GeneratorOptions {
        blank_line_style: BlankLineStyle::Separators,
        ..Default::default()
    };
    let blocks = insert_separators(vec![click("#a")]);
    let body = Renderer::new(&opts).render_body(&blocks);
    assert_eq!(body, "\n    cy.get('#a').click()\n\n");
}

#[test]
fn test_disabling_spacing_only_removes_blank_lines() {
    let blocks = vec![click("#a"), click("#b")];
    let spaced = Renderer::new(&options(true, true)).render_body(&blocks);
    let compact = Renderer::new(&options(true, false)).render_body(&blocks);

    assert_eq!(compact, "    cy.get('#a').click()\n    cy.get('#b').click()\n");
    assert_eq!(spaced.replace("\n \n", "\n"), compact);
}

#[test]
fn test_empty_blocks_render_no_lines() {
    let opts = options(true, true);
    let body = Renderer::new(&opts).render_body(&[Block::new(MAIN_FRAME_ID), click("#a")]);
    assert_eq!(body, "    cy.get('#a').click()\n \n");
}
