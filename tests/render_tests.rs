#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

#[cfg(test)]
mod render_tests {
    use tagtree::{html, AnyChild, Body, Element, FlowContent, Head, Html, Tag, Text, P};

    fn greeting() -> Html {
        html(|html| {
            html.head(|head| {
                head.title(|| "ciao");
            })
            .body(|body| {
                body.text("ciao ciao").p(|p| {
                    p.text("paragrafo");
                });
            });
        })
    }

    #[test]
    fn test_greeting_document() {
        let rendered = greeting().render();
        assert_eq!(
            rendered,
            "<html><head><title>ciao</title></head><body>ciao ciao<p>paragrafo</p></body></html>"
        );

        let head = rendered.find("<head>").unwrap();
        let title = rendered.find("<title>ciao</title>").unwrap();
        let body = rendered.find("<body>ciao ciao<p>paragrafo</p>").unwrap();
        assert!(head < title && title < body);
    }

    #[test]
    fn test_two_paragraphs_in_append_order() {
        let mut body = Body::new();
        body.p(|p| {
            p.text("first");
        })
        .p(|p| {
            p.text("second");
        });

        assert_eq!(body.render(), "<body><p>first</p><p>second</p></body>");
    }

    #[test]
    fn test_children_render_as_concatenation() {
        let doc = greeting();
        let children: String = doc.children().iter().map(|child| child.render()).collect();
        assert_eq!(doc.render(), format!("<html>{children}</html>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let doc = greeting();
        assert_eq!(doc.render(), doc.render());
        assert_eq!(doc.to_string(), doc.render());
    }

    #[test]
    fn test_subtree_renders_alone() {
        let doc = greeting();
        let body = doc.children().last().unwrap();
        assert_eq!(body.render(), "<body>ciao ciao<p>paragrafo</p></body>");
    }

    #[test]
    fn test_empty_tags() {
        assert_eq!(html(|_| {}).render(), "<html></html>");
        assert_eq!(Head::new().render(), "<head></head>");
        assert_eq!(P::new().render(), "<p></p>");

        let doc = html(|html| {
            html.body(|_| {});
        });
        assert_eq!(doc.render(), "<html><body></body></html>");
    }

    #[test]
    fn test_tag_names_do_not_vary_per_instance() {
        let first = P::new();
        let second = P::new();
        assert_eq!(first.name(), second.name());
        assert_eq!(first.name(), P::NAME);
    }

    #[test]
    fn test_moving_values_keeps_rendered_names() {
        let mut doc = html(|html| {
            html.body(|body| {
                body.text("kept");
            });
        });
        let mut other = html(|_| {});
        std::mem::swap(&mut doc, &mut other);
        assert_eq!(doc.render(), "<html></html>");
        assert_eq!(other.render(), "<html><body>kept</body></html>");

        let mut p = P::new();
        p.text("moved");
        let taken = std::mem::take(&mut p);
        assert_eq!(taken.render(), "<p>moved</p>");
        assert_eq!(p.render(), "<p></p>");
        assert_eq!(taken.name(), P::NAME);

        let mut body = Body::new();
        body.p(|inner| {
            *inner = taken;
        });
        assert_eq!(body.render(), "<body><p>moved</p></body>");
    }

    #[test]
    fn test_tree_metrics() {
        let doc = greeting();
        // html > head > title > "ciao"
        assert_eq!(doc.depth(), 3);
        // html, head, title, "ciao", body, "ciao ciao", p, "paragrafo"
        assert_eq!(doc.node_count(), 8);
    }

    // Known limitation: content and attribute values are not escaped.
    #[test]
    fn test_content_is_not_escaped() {
        let doc = html(|html| {
            html.body(|body| {
                body.text("<script>alert(1)</script> & more");
            });
        });
        assert_eq!(
            doc.render(),
            "<html><body><script>alert(1)</script> & more</body></html>"
        );

        let mut p = P::new();
        tagtree::WithAttributes::attr(&mut p, "title", "say \"hi\"");
        assert_eq!(p.render(), "<p title=\"say \"hi\"\"></p>");

        assert_eq!(Text::new("a < b").render(), "a < b");
    }
}
