use crate::avl_tree::node::Node;
use crate::entry::Entry;
use log::trace;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::Display;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

const RENDER_INDENT: &str = "            ";

pub fn height<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Restores the height and balance of the root of `tree`, assuming both of its subtrees are
// already balanced and differ in height by at most two.
fn balance<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                trace!("LR rotation at height {}", node.height);
                node.left = Some(rotate_left(child));
            } else {
                trace!("LL rotation at height {}", node.height);
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                trace!("RL rotation at height {}", node.height);
                node.right = Some(rotate_right(child));
            } else {
                trace!("RR rotation at height {}", node.height);
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

/// Inserts `new_node` below `tree` and rebalances every node on the insertion path. Returns
/// `false` and leaves the tree untouched if the key already exists.
pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match new_node.entry.key.cmp(&node.entry.key) {
            Ordering::Less => insert(&mut node.left, new_node),
            Ordering::Greater => insert(&mut node.right, new_node),
            Ordering::Equal => false,
        },
        None => {
            *tree = Some(Box::new(new_node));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.entry
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.entry
    })
}

pub fn pre_order<'a, T, U, F>(tree: &'a Tree<T, U>, visit: &mut F)
where
    F: FnMut(&'a Entry<T, U>),
{
    if let Some(ref node) = tree {
        visit(&node.entry);
        pre_order(&node.left, visit);
        pre_order(&node.right, visit);
    }
}

pub fn in_order<'a, T, U, F>(tree: &'a Tree<T, U>, visit: &mut F)
where
    F: FnMut(&'a Entry<T, U>),
{
    if let Some(ref node) = tree {
        in_order(&node.left, visit);
        visit(&node.entry);
        in_order(&node.right, visit);
    }
}

pub fn post_order<'a, T, U, F>(tree: &'a Tree<T, U>, visit: &mut F)
where
    F: FnMut(&'a Entry<T, U>),
{
    if let Some(ref node) = tree {
        post_order(&node.left, visit);
        post_order(&node.right, visit);
        visit(&node.entry);
    }
}

/// Appends a sideways drawing of `tree` to `out`: keys in-order, each on its own line and
/// indented according to its depth.
pub fn render<T, U>(tree: &Tree<T, U>, level: usize, out: &mut String)
where
    T: Display,
{
    if let Some(ref node) = tree {
        render(&node.left, level + 1, out);
        out.push('\n');
        for _ in 0..level {
            out.push_str(RENDER_INDENT);
        }
        out.push_str(&node.entry.key.to_string());
        render(&node.right, level + 1, out);
    }
}

/// Asserts ordering, cached heights and the AVL condition for every node. Returns the number
/// of nodes in the tree.
#[cfg(test)]
pub fn check<T, U>(tree: &Tree<T, U>) -> usize
where
    T: Ord,
{
    fn check_node<'a, T, U>(
        tree: &'a Tree<T, U>,
        lower: Option<&'a T>,
        upper: Option<&'a T>,
    ) -> (usize, usize)
    where
        T: Ord,
    {
        match tree {
            None => (0, 0),
            Some(ref node) => {
                let key = &node.entry.key;
                if let Some(lower) = lower {
                    assert!(lower < key);
                }
                if let Some(upper) = upper {
                    assert!(key < upper);
                }
                let (left_height, left_len) = check_node(&node.left, lower, Some(key));
                let (right_height, right_len) = check_node(&node.right, Some(key), upper);
                assert!(left_height <= right_height + 1);
                assert!(right_height <= left_height + 1);
                assert_eq!(node.height, left_height.max(right_height) + 1);
                (node.height, left_len + right_len + 1)
            },
        }
    }

    check_node(tree, None, None).1
}
