use super::{ChainBase, ChainError, ChainKind, ChainMut, LinkedQueue, LinkedStack};

#[test]
fn trait_objects_drive_both_variants() {
  let mut stack = LinkedStack::new();
  let mut queue = LinkedQueue::new();

  for chain in [&mut stack as &mut dyn ChainMut<i32>, &mut queue as &mut dyn ChainMut<i32>] {
    chain.push(1);
    chain.push(2);
    assert_eq!(chain.len(), 2);
    chain.pop().unwrap();
    assert_eq!(chain.len(), 1);
  }

  // The same call sequence removes opposite ends per discipline.
  assert_eq!(stack.render(), "1");
  assert_eq!(queue.render(), "2");
}

#[test]
fn kind_tags_identify_variants() {
  let stack: LinkedStack<i32> = LinkedStack::new();
  let queue: LinkedQueue<i32> = LinkedQueue::new();

  assert_eq!(stack.kind(), ChainKind::Lifo);
  assert_eq!(queue.kind(), ChainKind::Fifo);
  assert_eq!(stack.chain_ref().kind(), ChainKind::Lifo);
  assert_eq!(queue.chain_ref().kind(), ChainKind::Fifo);
}

#[test]
fn assign_from_same_kind_copies_contents() {
  let mut source = LinkedQueue::new();
  source.push(1);
  source.push(2);
  source.push(3);

  let mut target = LinkedQueue::new();
  target.push(9);
  target.assign_from(&source).unwrap();

  assert_eq!(target.render(), "1->2->3");
  assert_eq!(target.len(), 3);

  let mut stack_source = LinkedStack::new();
  stack_source.push(1);
  stack_source.push(2);

  let mut stack_target = LinkedStack::new();
  stack_target.assign_from(&stack_source).unwrap();
  assert_eq!(stack_target.render(), "2->1");
  assert_eq!(stack_target.len(), 2);
}

#[test]
fn assign_from_rejects_cross_kind_and_keeps_the_receiver() {
  let mut queue = LinkedQueue::new();
  queue.push(1);
  queue.push(2);

  let mut stack = LinkedStack::new();
  stack.push(7);

  let err = stack.assign_from(&queue).unwrap_err();
  assert_eq!(err, ChainError::KindMismatch { expected: ChainKind::Lifo, found: ChainKind::Fifo });
  assert_eq!(stack.render(), "7");
  assert_eq!(stack.len(), 1);

  let err = queue.assign_from(&stack).unwrap_err();
  assert_eq!(err, ChainError::KindMismatch { expected: ChainKind::Fifo, found: ChainKind::Lifo });
  assert_eq!(queue.render(), "1->2");
  assert_eq!(queue.len(), 2);
}

#[test]
fn assign_from_works_through_erased_references() {
  let mut source = LinkedStack::new();
  source.push(1);
  source.push(2);

  let mut target = LinkedQueue::new();
  target.push(7);

  {
    let source_ref: &dyn ChainBase<i32> = &source;
    let target_ref: &mut dyn ChainMut<i32> = &mut target;
    let err = target_ref.assign_from(source_ref).unwrap_err();
    assert_eq!(err, ChainError::KindMismatch { expected: ChainKind::Fifo, found: ChainKind::Lifo });
  }
  assert_eq!(target.render(), "7");

  let mut matching_target = LinkedStack::new();
  let target_ref: &mut dyn ChainMut<i32> = &mut matching_target;
  target_ref.assign_from(&source).unwrap();
  assert_eq!(matching_target.render(), "2->1");
}

#[test]
fn render_through_the_base_reference() {
  let mut queue = LinkedQueue::new();
  queue.push(1);
  queue.push(2);

  let chain: &dyn ChainBase<i32> = &queue;
  assert!(!chain.is_empty());
  assert_eq!(chain.render(), "1->2");
  assert_eq!(chain.peek_front().unwrap(), 1);
}

#[test]
fn push_parsed_through_the_mut_reference() {
  let mut stack: LinkedStack<i32> = LinkedStack::new();
  let chain: &mut dyn ChainMut<i32> = &mut stack;

  chain.push_parsed("3").unwrap();
  chain.push_parsed("4").unwrap();
  assert!(chain.push_parsed("x").is_err());
  assert_eq!(chain.render(), "4->3");
}
