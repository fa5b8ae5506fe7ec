//! Example: build a small document, query it, and write output.html

use eltree::{ElementTree, NodeId};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = ElementTree::new();

    let p5 = tree.new_node("p", "mhmmad", [("id", "unique_id5")])?;
    let p6 = tree.new_node("p", "mhmmad", [("id", "unique_id6")])?;
    let div1 = tree.new_node("div", vec![p5, p6], [("id", "unique_id1"), ("name", "karam")])?;

    let p12 = tree.new_node("p", "ahhh", [("id", "unique_id12")])?;
    let p13 = tree.new_node("p", "ahh", [("id", "unique_id13")])?;
    let div2 = tree.new_node("div", vec![p12, p13], [("id", "unique_id2")])?;

    let div3 = tree.new_node("div", "Content33", [("id", "unique_id3")])?;
    let p = tree.new_node("p", "Hello world!", [("id", "unique_id4"), ("name", "karam")])?;

    tree.append(div2, div3)?;
    tree.append(div3, p)?;
    tree.append(div1, div2)?;

    // Same id as div3, now inside div1's tree
    let h1 = tree.new_node("h1", "Hello", [("id", "unique_id3"), ("name", "karam")])?;
    if let Err(err) = tree.append(div1, h1) {
        println!("Rejected h1: {err}");
    }

    print!("{}", tree.render(div1)?);

    println!("Elements with tag div:");
    for id in tree.find_by_tag(div1, "div")? {
        print_element(&tree, id);
    }

    println!("Elements with name=\"karam\":");
    for id in tree.find_by_attr(div1, "name", "karam")? {
        print_element(&tree, id);
    }

    tree.render_to_output(div1)?;
    println!("Wrote {}", tree.config().output_path.display());

    Ok(())
}

fn print_element(tree: &ElementTree, id: NodeId) {
    if let Some(node) = tree.get(id) {
        let attrs: Vec<String> = node
            .attributes()
            .iter()
            .map(|a| format!("{}={:?}", a.name, a.value))
            .collect();
        println!("  {} {{{}}}", node.tag(), attrs.join(", "));
    }
}
