pub(crate) mod review_queue;
