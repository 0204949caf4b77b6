use linked_collections::queue::Queue;
#[path = "common/mod.rs"]
mod common;
use common::{init_logger, Token};

#[test]
fn test_new_queue() {
    init_logger();
    let mut queue = Queue::<Token>::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_fifo_order() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);

    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), Some(3));
    assert_eq!(queue.dequeue(), None);
    assert!(queue.is_empty());
}

#[test]
fn test_peek_does_not_remove() {
    let mut queue = Queue::new();
    queue.enqueue(Token::new(1, "a"));
    queue.enqueue(Token::new(2, "b"));

    assert_eq!(queue.peek(), Some(&Token::new(1, "a")));
    assert_eq!(queue.peek(), Some(&Token::new(1, "a")));
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_search() {
    let queue: Queue<i32> = [4, 5, 4, 6].into_iter().collect();

    assert!(queue.contains(&5));
    assert!(!queue.contains(&7));
    assert_eq!(queue.index_of(&4), Some(0));
    assert_eq!(queue.last_index_of(&4), Some(2));
    assert_eq!(queue.index_of(&7), None);
}

#[test]
fn test_to_vec_and_clear() {
    let mut queue: Queue<i32> = (1..=4).collect();
    assert_eq!(queue.to_vec(), vec![1, 2, 3, 4]);

    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.peek(), None);
}

#[test]
fn test_reverse() {
    let mut queue: Queue<i32> = (1..=3).collect();
    queue.reverse();
    assert_eq!(queue.to_vec(), vec![3, 2, 1]);
    assert_eq!(queue.peek(), Some(&3));
}

#[test]
fn test_clone_is_independent() {
    let mut queue = Queue::new();
    queue.enqueue(Token::new(1, "a"));
    queue.enqueue(Token::new(2, "b"));

    let mut clone = queue.clone();
    assert_eq!(clone.dequeue(), Some(Token::new(1, "a")));
    clone.enqueue(Token::new(3, "c"));

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.peek(), Some(&Token::new(1, "a")));
    assert_eq!(clone.to_vec(), vec![Token::new(2, "b"), Token::new(3, "c")]);
}

#[test]
fn test_for_each_and_iter() {
    let queue: Queue<i32> = (1..=3).collect();

    let mut sum = 0;
    queue.for_each(|item| sum += item);
    assert_eq!(sum, 6);

    let vec: Vec<&i32> = queue.iter().collect();
    assert_eq!(vec, vec![&1, &2, &3]);
}

#[test]
fn test_interleaved_enqueue_dequeue() {
    let mut queue = Queue::with_capacity(4);
    for round in 0..10 {
        queue.enqueue(round * 2);
        queue.enqueue(round * 2 + 1);
        assert_eq!(queue.dequeue(), Some(round));
    }
    assert_eq!(queue.len(), 10);
    assert_eq!(queue.peek(), Some(&10));
}
