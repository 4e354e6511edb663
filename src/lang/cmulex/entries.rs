//! Built-in core of the CMU dictionary
//!
//! Function words, number words, common homographs and the handful of
//! words the English letter-to-sound rules get wrong. Format is one
//! `word [pos] : phones` entry per line.

pub const CORE_ENTRIES: &str = "
's : z
a : ah0
about : ah0 b aw1 t
above : ah0 b ah1 v
after : ae1 f t er0
again : ah0 g eh1 n
against : ah0 g eh1 n s t
all : ao1 l
also : ao1 l s ow0
always : ao1 l w ey2 z
am : ae1 m
an : ae1 n
and : ae1 n d
another : ah0 n ah1 dh er0
any : eh1 n iy0
are : aa1 r
around : er0 aw1 n d
as : ae1 z
at : ae1 t
away : ah0 w ey1
back : b ae1 k
be : b iy1
because : b ih0 k ao1 z
been : b ih1 n
before : b ih0 f ao1 r
being : b iy1 ih0 ng
between : b ih0 t w iy1 n
both : b ow1 th
but : b ah1 t
by : b ay1
can : k ae1 n
can't : k ae1 n t
cents : s eh1 n t s
cent : s eh1 n t
cetera : s eh1 t er0 ah0
come : k ah1 m
could : k uh1 d
day : d ey1
did : d ih1 d
do : d uw1
doctor : d aa1 k t er0
does : d ah1 z
dollar : d aa1 l er0
dollars : d aa1 l er0 z
don't : d ow1 n t
down : d aw1 n
each : iy1 ch
eight : ey1 t
eighteen : ey0 t iy1 n
eighth : ey1 t th
eighty : ey1 t iy0
eleven : ih0 l eh1 v ah0 n
else : eh1 l s
english : ih1 ng g l ih0 sh
et : eh1 t
even : iy1 v ih0 n
every : eh1 v er0 iy0
fifteen : f ih0 f t iy1 n
fifth : f ih1 f th
fifty : f ih1 f t iy0
first : f er1 s t
five : f ay1 v
for : f ao1 r
forty : f ao1 r t iy0
four : f ao1 r
fourteen : f ao1 r t iy1 n
from : f r ah1 m
get : g eh1 t
give : g ih1 v
go : g ow1
good : g uh1 d
great : g r ey1 t
had : hh ae1 d
has : hh ae1 z
have : hh ae1 v
he : hh iy1
hello : hh ah0 l ow1
her : hh er1
here : hh iy1 r
him : hh ih1 m
his : hh ih1 z
how : hh aw1
hundred : hh ah1 n d r ah0 d
hundredth : hh ah1 n d r ah0 d th
i : ay1
i'm : ay1 m
if : ih1 f
in : ih0 n
into : ih0 n t uw1
is : ih1 z
it : ih1 t
it's : ih1 t s
its : ih1 t s
junior : jh uw1 n y er0
just : jh ah1 s t
know : n ow1
lead n : l eh1 d
lead v : l iy1 d
let's : l eh1 t s
like : l ay1 k
live v : l ih1 v
live n : l ay1 v
look : l uh1 k
make : m ey1 k
many : m eh1 n iy0
me : m iy1
million : m ih1 l y ah0 n
minus : m ay1 n ah0 s
mister : m ih1 s t er0
missus : m ih1 s ih0 z
miz : m ih1 z
more : m ao1 r
most : m ow1 s t
my : m ay1
nine : n ay1 n
nineteen : n ay1 n t iy1 n
ninety : n ay1 n t iy0
ninth : n ay1 n th
no : n ow1
not : n aa1 t
now : n aw1
object n : aa1 b jh eh0 k t
object v : ah0 b jh eh1 k t
of : ah1 v
off : ao1 f
oh : ow1
on : aa1 n
once : w ah1 n s
one : w ah1 n
only : ow1 n l iy0
or : ao1 r
other : ah1 dh er0
our : aw1 er0
out : aw1 t
over : ow1 v er0
people : p iy1 p ah0 l
percent : p er0 s eh1 n t
point : p oy1 n t
present n : p r eh1 z ah0 n t
present v : p r iy0 z eh1 n t
professor : p r ah0 f eh1 s er0
read v : r iy1 d
read vbd : r eh1 d
record n : r eh1 k er0 d
record v : r ih0 k ao1 r d
said : s eh1 d
saint : s ey1 n t
say : s ey1
second : s eh1 k ah0 n d
see : s iy1
senior : s iy1 n y er0
seven : s eh1 v ah0 n
seventeen : s eh1 v ah0 n t iy1 n
seventy : s eh1 v ah0 n t iy0
she : sh iy1
should : sh uh1 d
six : s ih1 k s
sixteen : s ih0 k s t iy1 n
sixty : s ih1 k s t iy0
so : s ow1
some : s ah1 m
speech : s p iy1 ch
street : s t r iy1 t
such : s ah1 ch
take : t ey1 k
ten : t eh1 n
than : dh ae1 n
that : dh ae1 t
that's : dh ae1 t s
the : dh ah0
their : dh eh1 r
them : dh eh1 m
then : dh eh1 n
there : dh eh1 r
these : dh iy1 z
they : dh ey1
thing : th ih1 ng
think : th ih1 ng k
third : th er1 d
thirteen : th er1 t iy1 n
thirty : th er1 t iy0
this : dh ih1 s
those : dh ow1 z
thousand : th aw1 z ah0 n d
three : th r iy1
through : th r uw1
time : t ay1 m
to : t uw1
today : t ah0 d ey1
too : t uw1
trillion : t r ih1 l y ah0 n
billion : b ih1 l y ah0 n
twelve : t w eh1 l v
twelfth : t w eh1 l f th
twenty : t w eh1 n t iy0
two : t uw1
under : ah1 n d er0
up : ah1 p
us : ah1 s
use : y uw1 z
versus : v er1 s ah0 s
very : v eh1 r iy0
voice : v oy1 s
want : w aa1 n t
was : w aa1 z
water : w ao1 t er0
way : w ey1
we : w iy1
well : w eh1 l
were : w er1
what : w ah1 t
what's : w ah1 t s
when : w eh1 n
where : w eh1 r
which : w ih1 ch
who : hh uw1
why : w ay1
wind n : w ih1 n d
wind v : w ay1 n d
will : w ih1 l
with : w ih1 dh
word : w er1 d
world : w er1 l d
would : w uh1 d
year : y ih1 r
yes : y eh1 s
you : y uw1
your : y ao1 r
zero : z iy1 r ow0
";
