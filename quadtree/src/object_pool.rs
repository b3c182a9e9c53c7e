pub(crate) struct ObjectPool<T: Resettable> {
    pool: Vec<T>,
    max_size: usize,
}

impl<T> ObjectPool<T>
where
    T: Resettable,
{
    pub(crate) fn new(max_size: usize) -> Self {
        ObjectPool {
            pool: Vec::new(),
            max_size,
        }
    }

    // Reuse a pooled object if there is one, otherwise build a fresh default
    pub(crate) fn get(&mut self) -> T
    where
        T: Default,
    {
        self.pool.pop().unwrap_or_default()
    }

    // Reset and keep the object unless the pool is already full
    pub(crate) fn return_object(&mut self, mut obj: T) {
        if self.pool.len() < self.max_size {
            obj.reset();
            self.pool.push(obj);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.pool.len()
    }
}

pub(crate) trait Resettable {
    fn reset(&mut self);
}

impl<T> Resettable for Vec<T> {
    fn reset(&mut self) {
        self.clear();
    }
}
