use crate::arena::Arena;
use crate::types::Node;

/// Renders the subtree under `node` as an indented tree.
///
/// `label` formats a single node; children are printed on the following
/// lines as `L=`/`R=` entries, `∅` marking an empty link.
pub fn print<N, F>(arena: &Arena<N>, node: Option<u32>, tab: &str, label: &F) -> String
where
    N: Node,
    F: Fn(u32, &N) -> String,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            let nested = format!("{tab}  ");
            let left = print(arena, n.l(), &nested, label);
            let right = print(arena, n.r(), &nested, label);
            format!("{}\n{tab}L={left}\n{tab}R={right}", label(i, n))
        }
    }
}
