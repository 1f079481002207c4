/*!
# Values

Every stack entry holds one value and, optionally, a note.

## Numbers

Real and complex numbers share a type. A field is read as a real if it
parses as one, otherwise a trailing `i` makes it complex.

```text
> 2.5 -1e3 i -i 4i 3+4i 1.5-2e-3i
```

A complex number with no imaginary part prints as a plain real. Tag one
with `rad`, `deg`, or `grad` to see it as a magnitude and an angle, and
`rect` to go back. The polar form can be typed in as shown.

```text
> 3+3i deg
  1: 4.242640687119285@45deg
> 2@90deg im
  2: 4.242640687119285@45deg
  1: 2
```

## Integers

A trailing `d`, `x`, `o`, or `b` reads the digits in base 10, 16, 8,
or 2. Integers keep their base through arithmetic. When two integers
meet, the result uses the base of the first.

```text
> 10x 10d +
  1: 1ax
> 7d 2d /
  2: 1ax
  1: 3d
```

Division of two integers truncates. Mixing an integer with a real makes
a real. Arithmetic that overflows 64 bits is an error, not a wrap.

## Strings

Strings are written between `'` or `"` quotes, or between `{` and `}`.
Braces nest, so a brace string can hold another program.

```text
> 'one' "two" {three {four}}
```

`+` joins a string with anything else, keeping the order of operands and
the string's quotes. Inside quotes every character is literal. Outside
quotes `\` makes the next character literal, so `a\ b` is one field and
`\#` is not a comment.

## Booleans

`true` and `false`. Comparisons produce them and `if`, `and`, `or`,
`not` consume them. Booleans never turn into numbers; adding one to a
number is an error.

## Notes

`note` attaches text to a value. It prints after the value and follows
it through arithmetic. An empty note removes it.

```text
> 3 'kg' note 2 *
  1: 6 kg
```

## Ordering

Values of different kinds compare as boolean, then number, then string.
Numbers compare by real part then imaginary part, and two numbers within
`1e-9` of each other are equal. Values of different kinds are never
equal.

*/
