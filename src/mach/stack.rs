use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// Pushing onto a full stack fails and leaves it unchanged.

pub struct Stack<T> {
    max_len: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(max_len: usize) -> Stack<T> {
        Stack {
            max_len,
            vec: vec![],
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.max_len
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(error!(StackFull));
        }
        self.vec.push(val);
        Ok(())
    }
    /// Put back a value that was just popped. Skips the capacity check
    /// since popping made room for it.
    pub fn restore(&mut self, val: T) {
        self.vec.push(val);
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(error!(StackEmpty)),
        }
    }
    /// Pops two values, returned in the order they were pushed.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        self.require(2)?;
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
    pub fn pop_n(&mut self, len: usize) -> Result<Vec<T>> {
        self.require(len)?;
        let range = (self.vec.len() - len)..;
        Ok(self.vec.drain(range).collect())
    }
    /// Counts back from the top, 0 being the top.
    pub fn peek(&self, n: usize) -> Result<&T> {
        if n < self.vec.len() {
            Ok(&self.vec[self.vec.len() - 1 - n])
        } else {
            Err(error!(NotEnoughStackFrames))
        }
    }
    /// Fails unless at least `n` values are on the stack.
    pub fn require(&self, n: usize) -> Result<()> {
        if self.vec.len() >= n {
            Ok(())
        } else if self.vec.is_empty() {
            Err(error!(StackEmpty))
        } else {
            Err(error!(NotEnoughStackFrames))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_full_rejects_push() {
        let mut s = Stack::new(2);
        s.push(1).unwrap();
        s.push(2).unwrap();
        assert_eq!(s.push(3).unwrap_err().code(), ErrorCode::StackFull);
        assert_eq!(s.len(), 2);
        assert_eq!(s.last(), Some(&2));
    }

    #[test]
    fn test_peek() {
        let mut s = Stack::new(8);
        s.push('a').unwrap();
        s.push('b').unwrap();
        assert_eq!(s.peek(0).unwrap(), &'b');
        assert_eq!(s.peek(1).unwrap(), &'a');
        assert_eq!(s.peek(2).unwrap_err().code(), ErrorCode::NotEnoughStackFrames);
    }

    #[test]
    fn test_pop_2_leaves_one() {
        let mut s = Stack::new(8);
        s.push(1).unwrap();
        assert_eq!(s.pop_2().unwrap_err().code(), ErrorCode::NotEnoughStackFrames);
        assert_eq!(s.len(), 1);
        s.push(2).unwrap();
        assert_eq!(s.pop_2().unwrap(), (1, 2));
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::StackEmpty);
    }

    #[test]
    fn test_pop_n() {
        let mut s = Stack::new(8);
        for i in 0..4 {
            s.push(i).unwrap();
        }
        assert_eq!(s.pop_n(3).unwrap(), vec![1, 2, 3]);
        assert_eq!(s.len(), 1);
    }
}
